// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    parse_pair_code, AnalysisRecord, LanguagePair, LanguageRegistry, PairCode, PairCodeError,
    TranslationTriple, TripleColumns,
};

pub use crate::analysis::{
    are_paraphrases, is_repeated_substring, percent_empty, percent_source_copy, same_language,
    LanguageIdentifier, LanguageTag, PairAnalyzer, WhatlangIdentifier, PARAPHRASE_THRESHOLD,
};

pub use crate::scoring::{ChrfScorer, CommandScorer, ParaphraseScorer, ScorerError, ScoringTriple};

pub use crate::io::{upsert, ReportStore, ReportTable};

pub use crate::errors::{Error, Result};
