//! Paraphrase decisions on top of a [`ParaphraseScorer`].

use crate::errors::{Error, Result};
use crate::scoring::{validate_scores, ParaphraseScorer, ScoringTriple};

/// Similarity at or above which two texts are judged paraphrases.
pub const PARAPHRASE_THRESHOLD: f64 = 0.80;

pub const DEFAULT_BATCH_SIZE: usize = 512;

/// Judge each aligned pair `(texts1[i], texts2[i])`.
///
/// `texts1` plays both the source and the reference role and `texts2` the
/// hypothesis role. Either every pair gets a verdict or the call fails.
pub fn are_paraphrases<A: AsRef<str>, B: AsRef<str>>(
    texts1: &[A],
    texts2: &[B],
    scorer: &dyn ParaphraseScorer,
    batch_size: usize,
) -> Result<Vec<bool>> {
    if texts1.len() != texts2.len() {
        return Err(Error::ShapeMismatch {
            left: texts1.len(),
            right: texts2.len(),
        });
    }

    let batch: Vec<ScoringTriple> = texts1
        .iter()
        .zip(texts2)
        .map(|(t1, t2)| ScoringTriple {
            src: t1.as_ref().to_string(),
            mt: t2.as_ref().to_string(),
            reference: t1.as_ref().to_string(),
        })
        .collect();

    let scores = scorer
        .score(&batch, batch_size)
        .and_then(|scores| validate_scores(batch.len(), scores))
        .map_err(|e| {
            log::error!("Error during paraphrase scoring: {}", e);
            Error::Scorer(e)
        })?;

    Ok(scores
        .into_iter()
        .map(|score| score >= PARAPHRASE_THRESHOLD)
        .collect())
}
