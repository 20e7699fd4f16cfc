// Test utility module for teatool integration tests
#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use teatool::analysis::{LanguageIdentifier, LanguageTag};
use teatool::scoring::{ParaphraseScorer, ScorerError, ScoringTriple};
use tempfile::TempDir;

/// Tags by script: Latin letters are "en", Devanagari is "hi", anything else unknown.
pub struct ScriptIdentifier;

impl LanguageIdentifier for ScriptIdentifier {
    fn identify(&self, text: &str) -> LanguageTag {
        let first = text.chars().find(|c| c.is_alphabetic());
        match first {
            Some(c) if c.is_ascii_alphabetic() => LanguageTag::known("en"),
            Some(c) if ('\u{0900}'..='\u{097F}').contains(&c) => LanguageTag::known("hi"),
            _ => LanguageTag::Unknown,
        }
    }
}

/// Scores 1.0 when hypothesis and reference match after trimming, else 0.0.
/// Counts how many times it was invoked.
#[derive(Default)]
pub struct ExactMatchScorer {
    pub calls: Cell<usize>,
}

impl ParaphraseScorer for ExactMatchScorer {
    fn score(&self, batch: &[ScoringTriple], _batch_size: usize) -> Result<Vec<f64>, ScorerError> {
        self.calls.set(self.calls.get() + 1);
        Ok(batch
            .iter()
            .map(|t| if t.mt.trim() == t.reference.trim() { 1.0 } else { 0.0 })
            .collect())
    }
}

/// Always fails, like a model rejecting an incompatible batch.
pub struct FailingScorer;

impl ParaphraseScorer for FailingScorer {
    fn score(&self, _batch: &[ScoringTriple], _batch_size: usize) -> Result<Vec<f64>, ScorerError> {
        Err(ScorerError::Exit {
            status: "exit status: 1".into(),
            stderr: "incompatible batch".into(),
        })
    }
}

/// Helper to create a temp directory with input files.
pub fn create_inputs(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut paths = Vec::with_capacity(files.len());

    for (name, content) in files {
        let file_path = temp_dir.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write input file");
        paths.push(file_path);
    }

    (temp_dir, paths)
}

pub fn report_path(dir: &Path) -> PathBuf {
    dir.join("translation_stats.csv")
}
