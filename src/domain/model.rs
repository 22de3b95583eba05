use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two supported unit pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionKind {
    /// Fahrenheit to Celsius
    Temperature,
    /// Miles to kilometers
    Distance,
}

impl ConversionKind {
    pub const ALL: [ConversionKind; 2] = [ConversionKind::Distance, ConversionKind::Temperature];

    pub fn prompt(&self) -> &'static str {
        match self {
            ConversionKind::Temperature => "Input Fahrenheit temp to convert to Celsius:",
            ConversionKind::Distance => "Input distance in miles to convert to kilometers:",
        }
    }

    pub fn source_unit(&self) -> &'static str {
        match self {
            ConversionKind::Temperature => "F",
            ConversionKind::Distance => "miles",
        }
    }

    pub fn target_unit(&self) -> &'static str {
        match self {
            ConversionKind::Temperature => "°C",
            ConversionKind::Distance => "kilometers",
        }
    }

    /// Word used in the invalid-input message.
    pub fn noun(&self) -> &'static str {
        match self {
            ConversionKind::Temperature => "temperature",
            ConversionKind::Distance => "distance",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            ConversionKind::Temperature => "Temperature",
            ConversionKind::Distance => "Distance",
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl FromStr for ConversionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" | "t" => Ok(ConversionKind::Temperature),
            "distance" | "dist" | "d" => Ok(ConversionKind::Distance),
            other => Err(format!("unknown conversion kind: {}", other)),
        }
    }
}

/// A validated input value tagged with its kind.
///
/// Only `core::parse::parse_input` builds one from text, so a request never
/// holds a value that came from an unparsable string.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    kind: ConversionKind,
    value: f64,
    raw: String,
}

impl ConversionRequest {
    pub(crate) fn new(kind: ConversionKind, value: f64, raw: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            raw: raw.into(),
        }
    }

    pub fn kind(&self) -> ConversionKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The text exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionResult {
    Value(f64),
    InvalidInput,
}

impl ConversionResult {
    pub fn value(&self) -> Option<f64> {
        match self {
            ConversionResult::Value(v) => Some(*v),
            ConversionResult::InvalidInput => None,
        }
    }
}

/// Terminal state of one parse → convert → format run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Success(ConversionRecord),
    Failure(crate::utils::error::ParseError),
}

impl ConversionOutcome {
    /// The line shown to the user for either outcome.
    pub fn message(&self) -> String {
        match self {
            ConversionOutcome::Success(record) => record.message.clone(),
            ConversionOutcome::Failure(e) => e.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success(_))
    }

    pub fn result(&self) -> ConversionResult {
        match self {
            ConversionOutcome::Success(record) => ConversionResult::Value(record.value),
            ConversionOutcome::Failure(_) => ConversionResult::InvalidInput,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub kind: ConversionKind,
    pub input: String,
    pub value: f64,
    pub formatted: String,
    pub message: String,
}
