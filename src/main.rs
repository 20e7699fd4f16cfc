use anyhow::Result;
use clap::Parser;
use teatool::cli::Cli;
use teatool::commands::analyze::{handle_analyze, AnalyzeConfig};
use teatool::config::{load_config, load_config_from_path, TeatoolConfig};
use teatool::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let Some(input) = cli.input.clone() else {
        eprintln!(
            "Error: input file not provided. Please provide path to a folder/file containing translation outputs"
        );
        std::process::exit(1);
    };

    let settings = cli.apply_overrides(load_settings(&cli)?);
    let config = AnalyzeConfig {
        input,
        settings,
        pair: cli.pair_code(),
        formatting_config: create_formatting_config(cli.plain),
        quiet: cli.quiet,
    };

    handle_analyze(config)?;
    Ok(())
}

fn init_logging(cli: &Cli) {
    // RUST_LOG, when set, wins over -v.
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn load_settings(cli: &Cli) -> Result<TeatoolConfig> {
    match &cli.config {
        Some(path) => Ok(load_config_from_path(path)?),
        None => Ok(load_config()),
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
