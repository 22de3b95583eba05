pub mod convert;
pub mod engine;
pub mod format;
pub mod parse;

pub use crate::domain::model::{ConversionKind, ConversionOutcome, ConversionRecord, ConversionRequest};
pub use crate::domain::ports::{ConfigProvider, Interaction, NoticeLevel};
pub use crate::utils::error::Result;
