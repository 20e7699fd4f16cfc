//! Character n-gram F-score (chrF) between hypothesis and reference.
//!
//! Whitespace is ignored, orders 1 through [`MAX_ORDER`] are averaged and
//! recall is weighted by `beta`.

use super::{ParaphraseScorer, ScorerError, ScoringTriple};
use std::collections::HashMap;

pub const MAX_ORDER: usize = 6;
pub const DEFAULT_BETA: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct ChrfScorer {
    max_order: usize,
    beta: f64,
}

impl Default for ChrfScorer {
    fn default() -> Self {
        Self {
            max_order: MAX_ORDER,
            beta: DEFAULT_BETA,
        }
    }
}

impl ChrfScorer {
    pub fn new(max_order: usize, beta: f64) -> Self {
        Self {
            max_order: max_order.max(1),
            beta,
        }
    }

    pub fn sentence_score(&self, hypothesis: &str, reference: &str) -> f64 {
        let hyp: Vec<char> = hypothesis.chars().filter(|c| !c.is_whitespace()).collect();
        let reference: Vec<char> = reference.chars().filter(|c| !c.is_whitespace()).collect();

        let mut precision = 0.0;
        let mut recall = 0.0;
        let mut orders = 0usize;

        for n in 1..=self.max_order {
            let hyp_grams = ngrams(&hyp, n);
            let ref_grams = ngrams(&reference, n);
            let hyp_total: usize = hyp_grams.values().sum();
            let ref_total: usize = ref_grams.values().sum();
            if hyp_total == 0 || ref_total == 0 {
                continue;
            }

            let matches: usize = hyp_grams
                .iter()
                .map(|(gram, count)| (*count).min(ref_grams.get(gram).copied().unwrap_or(0)))
                .sum();
            precision += matches as f64 / hyp_total as f64;
            recall += matches as f64 / ref_total as f64;
            orders += 1;
        }

        if orders == 0 {
            // Nothing to compare at any order: only identical inputs match.
            return if hyp == reference { 1.0 } else { 0.0 };
        }

        let precision = precision / orders as f64;
        let recall = recall / orders as f64;
        let beta2 = self.beta * self.beta;
        let denom = beta2 * precision + recall;
        if denom == 0.0 {
            return 0.0;
        }
        ((1.0 + beta2) * precision * recall / denom).clamp(0.0, 1.0)
    }
}

fn ngrams(chars: &[char], n: usize) -> HashMap<&[char], usize> {
    let mut counts = HashMap::new();
    if chars.len() >= n {
        for window in chars.windows(n) {
            *counts.entry(window).or_insert(0) += 1;
        }
    }
    counts
}

impl ParaphraseScorer for ChrfScorer {
    fn score(
        &self,
        batch: &[ScoringTriple],
        _batch_size: usize,
    ) -> Result<Vec<f64>, ScorerError> {
        Ok(batch
            .iter()
            .map(|t| self.sentence_score(&t.mt, &t.reference))
            .collect())
    }
}
