use clap::Parser;
use std::process::ExitCode;
use tempdist::app::convert_once;
use tempdist::config::Command;
use tempdist::core::ConfigProvider;
use tempdist::utils::logger;
use tempdist::utils::validation::{validate_path, Validate};
use tempdist::{CliConfig, Console, ConverterError, Shell, TomlConfig};

fn main() -> ExitCode {
    let args = CliConfig::parse();

    // 載入配置並套用命令列覆蓋設定
    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            return ExitCode::from(e.exit_code());
        }
    };
    config.apply_overrides(args.json, args.verbose);

    // 初始化日誌
    logger::init_cli_logger(config.log_level());
    tracing::debug!("CLI args: {:?}", args);

    let result = match &args.command {
        Some(command) => run_once(command, &config),
        None => run_shell(&config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            ExitCode::from(e.exit_code())
        }
    }
}

fn load_config(args: &CliConfig) -> Result<TomlConfig, ConverterError> {
    let config = match &args.config {
        Some(path) => {
            validate_path("config", path)?;
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run_once(command: &Command, config: &TomlConfig) -> Result<u8, ConverterError> {
    convert_once(
        command.kind(),
        command.value(),
        config.json_output(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
}

fn run_shell(config: &TomlConfig) -> Result<u8, ConverterError> {
    let mut shell = Shell::with_config(Console::stdio(), config);
    let signal = shell.run()?;
    tracing::debug!("Shell finished with {:?}", signal);
    Ok(0)
}
