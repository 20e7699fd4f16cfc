//! Paraphrase scoring backends.
//!
//! A scorer receives aligned `(src, mt, ref)` triples and returns one
//! similarity in `[0, 1]` per triple. Scorers are built once by the driver
//! and borrowed by the analysis for every file.

pub mod chrf;
pub mod command;

pub use chrf::ChrfScorer;
pub use command::CommandScorer;

use serde::Serialize;
use thiserror::Error;

/// One unit submitted to a scorer. Field names match what COMET-style
/// scorers expect on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringTriple {
    pub src: String,
    pub mt: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("failed to run scorer '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode scorer input: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("scorer exited with {status}: {stderr}")]
    Exit { status: String, stderr: String },

    #[error("scorer output line {line} is not a number: {content}")]
    Malformed { line: usize, content: String },

    #[error("scorer returned {got} scores for {expected} inputs")]
    Count { expected: usize, got: usize },

    #[error("scorer returned out-of-range score {score} at position {index}")]
    OutOfRange { index: usize, score: f64 },
}

pub trait ParaphraseScorer {
    /// Score every triple. `batch_size` is advisory; implementations may
    /// sub-batch however they like but must return exactly one score per
    /// input or fail.
    fn score(&self, batch: &[ScoringTriple], batch_size: usize)
        -> Result<Vec<f64>, ScorerError>;
}

impl<T: ParaphraseScorer + ?Sized> ParaphraseScorer for Box<T> {
    fn score(
        &self,
        batch: &[ScoringTriple],
        batch_size: usize,
    ) -> Result<Vec<f64>, ScorerError> {
        (**self).score(batch, batch_size)
    }
}

/// Check a scorer's output against its input before anyone trusts it.
pub fn validate_scores(expected: usize, scores: Vec<f64>) -> Result<Vec<f64>, ScorerError> {
    if scores.len() != expected {
        return Err(ScorerError::Count {
            expected,
            got: scores.len(),
        });
    }
    if let Some((index, &score)) = scores
        .iter()
        .enumerate()
        .find(|(_, s)| !(0.0..=1.0).contains(*s))
    {
        return Err(ScorerError::OutOfRange { index, score });
    }
    Ok(scores)
}
