use crate::core::ConfigProvider;
use crate::utils::error::{ConverterError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub shell: Option<ShellConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    pub exit_notice: Option<bool>,
    pub show_menu: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConverterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConverterError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 套用命令列覆蓋設定
    pub fn apply_overrides(&mut self, json: bool, verbose: bool) {
        if json {
            self.output = Some(OutputConfig {
                format: Some("json".to_string()),
            });
        }
        if verbose {
            self.logging = Some(LoggingConfig {
                level: Some("debug".to_string()),
            });
        }
    }

    pub fn json_output(&self) -> bool {
        self.output_format().eq_ignore_ascii_case("json")
    }
}

impl ConfigProvider for TomlConfig {
    fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }

    fn exit_notice(&self) -> bool {
        self.shell
            .as_ref()
            .and_then(|s| s.exit_notice)
            .unwrap_or(true)
    }

    fn show_menu(&self) -> bool {
        self.shell.as_ref().and_then(|s| s.show_menu).unwrap_or(true)
    }

    fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("output.format", self.output_format(), &OUTPUT_FORMATS)?;
        validate_one_of("logging.level", self.log_level(), &LOG_LEVELS)?;
        Ok(())
    }
}
