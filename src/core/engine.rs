use crate::core::format::format_result;
use crate::core::parse::parse_input;
use crate::domain::model::{ConversionKind, ConversionOutcome, ConversionRecord, ConversionRequest};
use crate::utils::error::Result;

/// Runs the parse → convert → format pipeline for one user action.
///
/// Stateless: every call is independent of the ones before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionEngine;

impl ConversionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, kind: ConversionKind, raw: &str) -> ConversionOutcome {
        tracing::debug!("Parsing {} input {:?}", kind, raw);

        match parse_input(kind, raw) {
            Ok(request) => ConversionOutcome::Success(self.convert(&request)),
            Err(e) => {
                tracing::warn!("Rejected {} input {:?}", kind, raw);
                ConversionOutcome::Failure(e)
            }
        }
    }

    /// Convert an already validated request.
    pub fn convert(&self, request: &ConversionRequest) -> ConversionRecord {
        let kind = request.kind();
        let value = request.convert();
        tracing::debug!("Converted {} {} -> {}", request.value(), kind.source_unit(), value);

        let formatted = format_result(value);
        let message = success_message(kind, request.raw(), &formatted);

        ConversionRecord {
            kind,
            input: request.raw().to_string(),
            value,
            formatted,
            message,
        }
    }
}

/// `"<raw> <unit> equals <formatted> <target unit>."`
pub fn success_message(kind: ConversionKind, raw: &str, formatted: &str) -> String {
    format!(
        "{} {} equals {} {}.",
        raw,
        kind.source_unit(),
        formatted,
        kind.target_unit()
    )
}

/// Text shown for a successful conversion: the sentence, or the record as
/// single-line JSON.
pub fn render_record(record: &ConversionRecord, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(record)?)
    } else {
        Ok(record.message.clone())
    }
}
