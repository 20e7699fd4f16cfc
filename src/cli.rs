use crate::config::{ScorerConfig, TeatoolConfig};
use crate::core::PairCode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "teatool")]
#[command(about = "Simple tool to analyze translation outputs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a folder/file containing translation outputs
    pub input: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .teatool.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report file to create or update
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Advisory number of pairs sent to the scorer at once
    #[arg(long = "batch-size")]
    pub batch_size: Option<usize>,

    /// External scorer program (JSON lines on stdin, one score per line on stdout)
    #[arg(long = "scorer-command")]
    pub scorer_command: Option<String>,

    /// Argument passed to the external scorer (repeatable)
    #[arg(long = "scorer-arg", requires = "scorer_command", allow_hyphen_values = true)]
    pub scorer_args: Vec<String>,

    /// Source language code, overriding the file name
    #[arg(long = "source-lang", requires = "target_lang")]
    pub source_lang: Option<String>,

    /// Target language code, overriding the file name
    #[arg(long = "target-lang", requires = "source_lang")]
    pub target_lang: Option<String>,

    /// Only print one status line per file
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Explicit language pair, when both codes were given.
    pub fn pair_code(&self) -> Option<PairCode> {
        match (&self.source_lang, &self.target_lang) {
            (Some(source), Some(target)) => Some(PairCode {
                target: target.clone(),
                source: source.clone(),
            }),
            _ => None,
        }
    }

    /// Layer command-line flags over file configuration.
    pub fn apply_overrides(&self, mut config: TeatoolConfig) -> TeatoolConfig {
        if let Some(report) = &self.report {
            config.report_path = report.clone();
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(program) = &self.scorer_command {
            config.scorer = ScorerConfig::Command {
                program: program.clone(),
                args: self.scorer_args.clone(),
            };
        }
        config
    }

    /// Log filter for the requested verbosity.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
