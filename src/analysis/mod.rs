//! Translation defect detection.
//!
//! - [`heuristics`]: empty output, source copy and repetition detectors
//! - [`prompt`]: removal of prompt echoes from generated text
//! - [`language`]: language agreement on top of a pluggable identifier
//! - [`paraphrase`]: thresholded paraphrase verdicts from a scorer
//! - [`pair_analyzer`]: per-file aggregation into an [`AnalysisRecord`](crate::core::AnalysisRecord)

pub mod heuristics;
pub mod language;
pub mod pair_analyzer;
pub mod paraphrase;
pub mod prompt;

pub use heuristics::{is_repeated_substring, percent_empty, percent_source_copy};
pub use language::{same_language, LanguageIdentifier, LanguageTag, WhatlangIdentifier};
pub use pair_analyzer::{CleaningTally, PairAnalyzer};
pub use paraphrase::{are_paraphrases, PARAPHRASE_THRESHOLD};
pub use prompt::PromptStripper;
