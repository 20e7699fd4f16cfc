pub mod language;
pub mod types;

pub use language::{parse_pair_code, LanguagePair, LanguageRegistry, PairCode, PairCodeError};
pub use types::{AnalysisRecord, TranslationTriple, TripleColumns};
