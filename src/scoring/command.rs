//! Scoring through an external process, e.g. a wrapper around a neural
//! quality-estimation model.
//!
//! Protocol: one JSON object `{"src", "mt", "ref"}` per line on stdin, one
//! JSON number per line on stdout, in input order. One process is started
//! per chunk of `batch_size` triples.

use super::{validate_scores, ParaphraseScorer, ScorerError, ScoringTriple};
use serde::Serialize;
use std::io::Write;
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct CommandScorer {
    program: String,
    args: Vec<String>,
}

impl CommandScorer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn run_chunk(&self, chunk: &[ScoringTriple]) -> Result<Vec<f64>, ScorerError> {
        let spawn_error = |source| ScorerError::Spawn {
            program: self.program.clone(),
            source,
        };

        let input = encode_lines(chunk)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // Feed stdin from another thread so a chatty child cannot deadlock us.
        let stdin = child.stdin.take();
        let writer = std::thread::spawn(move || -> std::io::Result<()> {
            if let Some(mut stdin) = stdin {
                stdin.write_all(&input)?;
            }
            Ok(())
        });

        let output = child.wait_with_output().map_err(spawn_error)?;
        if let Ok(Err(e)) = writer.join() {
            log::debug!("Scorer closed stdin early: {}", e);
        }

        if !output.status.success() {
            return Err(ScorerError::Exit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let scores = parse_scores(&stdout)?;
        validate_scores(chunk.len(), scores)
    }
}

/// One JSON document per line, in input order.
pub fn encode_lines<T: Serialize>(items: &[T]) -> Result<Vec<u8>, ScorerError> {
    let mut input = Vec::new();
    for item in items {
        serde_json::to_writer(&mut input, item)?;
        input.push(b'\n');
    }
    Ok(input)
}

/// Parse one JSON number per non-blank line.
pub fn parse_scores(stdout: &str) -> Result<Vec<f64>, ScorerError> {
    stdout
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<f64>(line.trim()).map_err(|_| ScorerError::Malformed {
                line: idx + 1,
                content: line.to_string(),
            })
        })
        .collect()
}

impl ParaphraseScorer for CommandScorer {
    fn score(
        &self,
        batch: &[ScoringTriple],
        batch_size: usize,
    ) -> Result<Vec<f64>, ScorerError> {
        let mut scores = Vec::with_capacity(batch.len());
        for chunk in batch.chunks(batch_size.max(1)) {
            log::debug!(
                "Scoring {} triples with '{}'",
                chunk.len(),
                self.program
            );
            scores.extend(self.run_chunk(chunk)?);
        }
        Ok(scores)
    }
}
