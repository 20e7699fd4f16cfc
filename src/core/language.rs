//! Language registry and file-name derived language pairs.
//!
//! Input files carry their language pair in the file name: the token before the
//! first `_` holds a two-letter target code followed by the source code, so
//! `hien_sample.tsv` is English (source) translated into Hindi (target).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("cs", "Czech"),
    ("en", "English"),
    ("fr", "French"),
    ("hi", "Hindi"),
];

/// Failure modes of [`parse_pair_code`] and [`LanguageRegistry::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairCodeError {
    #[error("file name '{0}' has no '_' separating the language code")]
    MissingSeparator(String),

    #[error("language code '{0}' is too short, expected <target><source> such as 'hien'")]
    TooShort(String),

    #[error("unrecognized language code '{0}'")]
    UnknownCode(String),
}

/// Raw codes parsed from a file name, not yet resolved against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCode {
    pub target: String,
    pub source: String,
}

/// Resolved, human-readable language names for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source_language: String,
    pub target_language: String,
}

impl LanguagePair {
    pub fn new(source_language: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source_language, self.target_language)
    }
}

/// Closed mapping from short language codes to language names.
///
/// New pairs are supported by extending the registry explicitly, usually via
/// the `[languages]` table of `.teatool.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    names: BTreeMap<String, String>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageRegistry {
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_LANGUAGES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }

    /// Add or override entries. Codes are matched case-sensitively.
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.names
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Resolve both codes of a [`PairCode`] to language names.
    pub fn resolve(&self, code: &PairCode) -> Result<LanguagePair, PairCodeError> {
        let lookup = |c: &str| {
            self.name(c)
                .map(str::to_string)
                .ok_or_else(|| PairCodeError::UnknownCode(c.to_string()))
        };
        Ok(LanguagePair {
            source_language: lookup(&code.source)?,
            target_language: lookup(&code.target)?,
        })
    }

    /// Derive the language pair of an input file from its last path segment.
    pub fn pair_for_path(&self, path: &Path) -> Result<LanguagePair, PairCodeError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.resolve(&parse_pair_code(&file_name)?)
    }
}

/// Split the leading `<target><source>` token of a file name into its codes.
///
/// The token is everything before the first `_`. Its first two characters are
/// the target code and the remainder the source code.
pub fn parse_pair_code(file_name: &str) -> Result<PairCode, PairCodeError> {
    let (token, _) = file_name
        .split_once('_')
        .ok_or_else(|| PairCodeError::MissingSeparator(file_name.to_string()))?;

    let split_at = match token.char_indices().nth(2) {
        Some((idx, _)) => idx,
        None => return Err(PairCodeError::TooShort(token.to_string())),
    };

    let (target, source) = token.split_at(split_at);
    Ok(PairCode {
        target: target.to_string(),
        source: source.to_string(),
    })
}
