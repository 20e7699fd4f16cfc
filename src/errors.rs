//! Shared error types for the application

use crate::core::language::PairCodeError;
use crate::scoring::ScorerError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for teatool operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Input file does not exist
    #[error("file '{}' not found", .0.display())]
    MissingInput(PathBuf),

    /// Input table is not shaped as (source, translation, reference)
    #[error(
        "input file should have exactly {expected} columns (source, translation, reference), \
         found {found} on row {row}"
    )]
    Shape {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A percentage was requested over zero rows
    #[error("cannot compute {metric} over an empty input")]
    EmptyInput { metric: &'static str },

    /// Language pair could not be derived from the file name
    #[error(transparent)]
    LanguageCode(#[from] PairCodeError),

    /// Paraphrase judge received unaligned inputs
    #[error("paraphrase inputs must have the same length ({left} != {right})")]
    ShapeMismatch { left: usize, right: usize },

    /// Paraphrase scorer failed
    #[error("scorer failed: {0}")]
    Scorer(#[from] ScorerError),

    /// Report table could not be loaded or saved
    #[error("report error in {}: {message}", .path.display())]
    Report { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV/TSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a report error for the given report file
    pub fn report(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Report {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether the failure belongs to the input file itself (shape, name, existence)
    /// rather than to the analysis machinery.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingInput(_)
                | Self::Shape { .. }
                | Self::EmptyInput { .. }
                | Self::LanguageCode(_)
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
