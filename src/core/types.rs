//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One evaluated unit: a source sentence, the system output and the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationTriple {
    pub source: String,
    pub translation: String,
    pub reference: String,
}

impl TranslationTriple {
    pub fn new(
        source: impl Into<String>,
        translation: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
            reference: reference.into(),
        }
    }
}

/// Column-oriented view of one file's triples.
///
/// The three columns always have the same length; the only way to build one
/// is from whole triples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleColumns {
    sources: Vec<String>,
    translations: Vec<String>,
    references: Vec<String>,
}

impl TripleColumns {
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn translations(&self) -> &[String] {
        &self.translations
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.sources
            .iter()
            .zip(&self.translations)
            .zip(&self.references)
            .map(|((s, t), r)| (s.as_str(), t.as_str(), r.as_str()))
    }
}

impl FromIterator<TranslationTriple> for TripleColumns {
    fn from_iter<I: IntoIterator<Item = TranslationTriple>>(iter: I) -> Self {
        let mut columns = TripleColumns::default();
        for triple in iter {
            columns.sources.push(triple.source);
            columns.translations.push(triple.translation);
            columns.references.push(triple.reference);
        }
        columns
    }
}

/// One row of the persisted report. `output_location` is the unique key.
///
/// Field order is the column order of the report file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub output_location: String,
    pub empty_output: f64,
    pub source_copy: f64,
    pub empty_translation: f64,
    pub repeat_hallucination: f64,
    pub generated_is_src_lang: f64,
    pub generated_is_ref_lang: f64,
    pub generated_is_source_paraphrase: f64,
    pub generated_is_reference_paraphrase: f64,
}

impl AnalysisRecord {
    /// Report column names, in order.
    pub const COLUMNS: [&'static str; 9] = [
        "output_location",
        "empty_output",
        "source_copy",
        "empty_translation",
        "repeat_hallucination",
        "generated_is_src_lang",
        "generated_is_ref_lang",
        "generated_is_source_paraphrase",
        "generated_is_reference_paraphrase",
    ];

    pub fn location_of(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    /// Metric values paired with their column names, key excluded.
    pub fn metrics(&self) -> [(&'static str, f64); 8] {
        [
            ("empty_output", self.empty_output),
            ("source_copy", self.source_copy),
            ("empty_translation", self.empty_translation),
            ("repeat_hallucination", self.repeat_hallucination),
            ("generated_is_src_lang", self.generated_is_src_lang),
            ("generated_is_ref_lang", self.generated_is_ref_lang),
            (
                "generated_is_source_paraphrase",
                self.generated_is_source_paraphrase,
            ),
            (
                "generated_is_reference_paraphrase",
                self.generated_is_reference_paraphrase,
            ),
        ]
    }
}
