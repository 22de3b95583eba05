pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{Console, Shell, ShellSignal};
pub use config::TomlConfig;
pub use core::convert::{convert_distance, convert_temperature};
pub use core::engine::ConversionEngine;
pub use core::format::format_result;
pub use core::parse::parse_input;
pub use domain::model::{ConversionKind, ConversionOutcome, ConversionRecord, ConversionResult};
pub use utils::error::{ConverterError, ParseError, Result};
