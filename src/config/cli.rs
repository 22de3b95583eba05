use crate::domain::model::ConversionKind;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "tempdist")]
#[command(about = "Convert Fahrenheit to Celsius and miles to kilometers")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a Fahrenheit temperature to Celsius
    #[command(visible_alias = "temp")]
    Temperature {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Convert a distance in miles to kilometers
    #[command(visible_alias = "dist")]
    Distance {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

impl Command {
    pub fn kind(&self) -> ConversionKind {
        match self {
            Command::Temperature { .. } => ConversionKind::Temperature,
            Command::Distance { .. } => ConversionKind::Distance,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Command::Temperature { value } | Command::Distance { value } => value,
        }
    }
}
