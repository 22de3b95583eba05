use crate::domain::model::ConversionKind;
use thiserror::Error;

/// 使用者輸入無法解析為有限的十進位數字
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {} entered. Please enter a valid numeric value:", .kind.noun())]
pub struct ParseError {
    pub kind: ConversionKind,
    pub input: String,
}

impl ParseError {
    pub fn new(kind: ConversionKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    ConfigValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConverterError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConverterError::Parse(e) => e.to_string(),
            ConverterError::IoError(e) => format!("Could not read or write the terminal: {}", e),
            ConverterError::SerializationError(e) => format!("Could not render the result: {}", e),
            ConverterError::ConfigParseError { message } => {
                format!("The configuration file is not valid TOML: {}", message)
            }
            ConverterError::ConfigValidationError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    /// 命令列結束碼：輸入錯誤為 2，其餘為 1
    pub fn exit_code(&self) -> u8 {
        match self {
            ConverterError::Parse(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;
