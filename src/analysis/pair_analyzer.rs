//! Per-file aggregation of all translation defect metrics.

use super::heuristics::{is_repeated_substring, percent_empty, percent_source_copy, percentage};
use super::language::{same_language, LanguageIdentifier};
use super::paraphrase::{are_paraphrases, DEFAULT_BATCH_SIZE};
use super::prompt::PromptStripper;
use crate::core::{AnalysisRecord, LanguagePair, TripleColumns};
use crate::errors::{Error, Result};
use crate::scoring::ParaphraseScorer;

/// Counters gathered while cleaning each translation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleaningTally {
    pub near_empty: usize,
    pub repeated: usize,
    pub source_language: usize,
    pub reference_language: usize,
}

/// Runs every detector over one file's triples.
///
/// The identifier and scorer are borrowed; their lifetime belongs to the
/// caller, which builds them once for the whole batch.
pub struct PairAnalyzer<'a> {
    identifier: &'a dyn LanguageIdentifier,
    scorer: &'a dyn ParaphraseScorer,
    batch_size: usize,
}

impl<'a> PairAnalyzer<'a> {
    pub fn new(identifier: &'a dyn LanguageIdentifier, scorer: &'a dyn ParaphraseScorer) -> Self {
        Self {
            identifier,
            scorer,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Analyze one file's triples into a report row keyed by `output_location`.
    pub fn analyze(
        &self,
        output_location: &str,
        triples: &TripleColumns,
        pair: &LanguagePair,
    ) -> Result<AnalysisRecord> {
        if triples.is_empty() {
            return Err(Error::EmptyInput {
                metric: "translation statistics",
            });
        }
        let total = triples.len();

        let empty_output = percent_empty(triples.translations())?;
        let source_copy = percent_source_copy(triples.sources(), triples.translations())?;

        let (cleaned, tally) = self.clean_all(triples, pair)?;
        log::debug!("{}: cleaning tally {:?}", output_location, tally);

        let vs_source = are_paraphrases(triples.sources(), &cleaned, self.scorer, self.batch_size)?;
        // Compares against the raw translation, not the reference column.
        let vs_translation = are_paraphrases(
            triples.translations(),
            &cleaned,
            self.scorer,
            self.batch_size,
        )?;

        Ok(AnalysisRecord {
            output_location: output_location.to_string(),
            empty_output,
            source_copy,
            empty_translation: percentage(tally.near_empty, total, "empty_translation")?,
            repeat_hallucination: percentage(tally.repeated, total, "repeat_hallucination")?,
            generated_is_src_lang: percentage(
                tally.source_language,
                total,
                "generated_is_src_lang",
            )?,
            generated_is_ref_lang: percentage(
                tally.reference_language,
                total,
                "generated_is_ref_lang",
            )?,
            generated_is_source_paraphrase: percentage(
                count_true(&vs_source),
                total,
                "generated_is_source_paraphrase",
            )?,
            generated_is_reference_paraphrase: percentage(
                count_true(&vs_translation),
                total,
                "generated_is_reference_paraphrase",
            )?,
        })
    }

    /// Strip prompt echoes from every translation and tally the per-pair checks.
    pub fn clean_all(
        &self,
        triples: &TripleColumns,
        pair: &LanguagePair,
    ) -> Result<(Vec<String>, CleaningTally)> {
        let stripper = PromptStripper::new(pair)?;
        let mut tally = CleaningTally::default();
        let mut cleaned = Vec::with_capacity(triples.len());

        for (source, translation, reference) in triples.iter() {
            let res = stripper.clean(source, translation);

            if res.split_whitespace().count() <= 1 {
                tally.near_empty += 1;
            }
            if is_repeated_substring(&res) {
                tally.repeated += 1;
            }
            if same_language(self.identifier, &res, source) {
                tally.source_language += 1;
            }
            if same_language(self.identifier, &res, reference) {
                tally.reference_language += 1;
            }

            cleaned.push(res);
        }

        Ok((cleaned, tally))
    }
}

fn count_true(verdicts: &[bool]) -> usize {
    verdicts.iter().filter(|v| **v).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::language::LanguageTag;
    use crate::core::TranslationTriple;
    use crate::scoring::{ScorerError, ScoringTriple};

    /// Everything ASCII is English, everything else unknown.
    struct AsciiIdentifier;

    impl LanguageIdentifier for AsciiIdentifier {
        fn identify(&self, text: &str) -> LanguageTag {
            let text = text.trim();
            if !text.is_empty() && text.is_ascii() {
                LanguageTag::known("en")
            } else {
                LanguageTag::Unknown
            }
        }
    }

    /// Scores 1.0 for exact (trimmed) matches, 0.0 otherwise.
    struct ExactScorer;

    impl ParaphraseScorer for ExactScorer {
        fn score(
            &self,
            batch: &[ScoringTriple],
            _batch_size: usize,
        ) -> std::result::Result<Vec<f64>, ScorerError> {
            Ok(batch
                .iter()
                .map(|t| if t.mt.trim() == t.reference.trim() { 1.0 } else { 0.0 })
                .collect())
        }
    }

    fn columns(rows: &[(&str, &str, &str)]) -> TripleColumns {
        rows.iter()
            .map(|(s, t, r)| TranslationTriple::new(*s, *t, *r))
            .collect()
    }

    fn pair() -> LanguagePair {
        LanguagePair::new("English", "Hindi")
    }

    #[test]
    fn copy_and_empty_rates() {
        let triples = columns(&[
            ("Hello", "Hello world", "Bonjour"),
            ("Bye", "Au revoir", "Good bye"),
        ]);
        let analyzer = PairAnalyzer::new(&AsciiIdentifier, &ExactScorer);
        let record = analyzer.analyze("hien_sample", &triples, &pair()).unwrap();

        assert_eq!(record.output_location, "hien_sample");
        assert_eq!(record.source_copy, 50.0);
        assert_eq!(record.empty_output, 0.0);
        // "Hello world" -> " world": a single token.
        assert_eq!(record.empty_translation, 50.0);
        assert_eq!(record.repeat_hallucination, 0.0);
    }

    #[test]
    fn language_agreement_counts() {
        let triples = columns(&[
            ("the cat", "बिल्ली", "बिल्ली"),
            ("the dog", "the dog barks", "कुत्ता"),
        ]);
        let analyzer = PairAnalyzer::new(&AsciiIdentifier, &ExactScorer);
        let record = analyzer.analyze("hien_x", &triples, &pair()).unwrap();

        // Only the second output ("barks") is identifiable and matches its ASCII source.
        assert_eq!(record.generated_is_src_lang, 50.0);
        // Non-ASCII references are unknown and never agree.
        assert_eq!(record.generated_is_ref_lang, 0.0);
    }

    #[test]
    fn paraphrase_metrics_use_source_and_raw_translation() {
        let triples = columns(&[
            ("same", "same", "ref"),
            ("src", "other text", "ref"),
        ]);
        let analyzer = PairAnalyzer::new(&AsciiIdentifier, &ExactScorer);
        let record = analyzer.analyze("hien_p", &triples, &pair()).unwrap();

        // Row 1 is cleaned to "" which matches neither "same" column.
        // Row 2 is left untouched and equals its raw translation only.
        assert_eq!(record.generated_is_source_paraphrase, 0.0);
        assert_eq!(record.generated_is_reference_paraphrase, 50.0);
    }

    #[test]
    fn repetition_is_counted_on_cleaned_output() {
        let triples = columns(&[("x", "abcabc", "r"), ("y", "abcd", "r")]);
        let analyzer = PairAnalyzer::new(&AsciiIdentifier, &ExactScorer);
        let record = analyzer.analyze("hien_r", &triples, &pair()).unwrap();
        assert_eq!(record.repeat_hallucination, 50.0);
    }

    #[test]
    fn cleaned_outputs_are_returned_in_order() {
        let triples = columns(&[
            ("Hi", "English: Hi Hindi: नमस्ते", "नमस्ते"),
            ("Bye", "  अलविदा ", "अलविदा"),
        ]);
        let analyzer = PairAnalyzer::new(&AsciiIdentifier, &ExactScorer);
        let (cleaned, tally) = analyzer.clean_all(&triples, &pair()).unwrap();
        assert_eq!(cleaned[0].trim(), "नमस्ते");
        assert_eq!(cleaned[1], "अलविदा");
        assert_eq!(tally.near_empty, 2);
    }

    #[test]
    fn empty_input_fails_fast() {
        let analyzer = PairAnalyzer::new(&AsciiIdentifier, &ExactScorer);
        let err = analyzer
            .analyze("hien_empty", &TripleColumns::default(), &pair())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyInput { .. }));
    }
}
