//! CLI command implementations.
//!
//! - **analyze**: analyze one translation file or a directory of them and
//!   upsert the results into the statistics report

pub mod analyze;

pub use analyze::{handle_analyze, AnalyzeConfig, BatchSummary, FileProcessor};
