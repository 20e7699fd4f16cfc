//! The analysis command: resolve inputs, analyze each file, persist rows.
//!
//! Files are handled strictly one after another. Each file is read, analyzed
//! and written to the report before the next one starts, so an interrupted
//! run keeps every row finished so far and a rerun overwrites the same rows.

use crate::analysis::{LanguageIdentifier, PairAnalyzer};
use crate::config::TeatoolConfig;
use crate::core::{AnalysisRecord, LanguagePair, LanguageRegistry, PairCode};
use crate::errors::{Error, Result};
use crate::formatting::{tag_fail, tag_ok, tag_skip, FormattingConfig};
use crate::io::{self, FileWalker, ReportStore};
use crate::scoring::ParaphraseScorer;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub settings: TeatoolConfig,
    /// Explicit language codes; when absent they come from each file name.
    pub pair: Option<PairCode>,
    pub formatting_config: FormattingConfig,
    pub quiet: bool,
}

/// Validates, analyzes and persists one input file at a time.
pub struct FileProcessor<'a> {
    registry: &'a LanguageRegistry,
    analyzer: PairAnalyzer<'a>,
    store: &'a ReportStore,
    explicit_pair: Option<LanguagePair>,
}

impl<'a> FileProcessor<'a> {
    pub fn new(
        registry: &'a LanguageRegistry,
        analyzer: PairAnalyzer<'a>,
        store: &'a ReportStore,
    ) -> Self {
        Self {
            registry,
            analyzer,
            store,
            explicit_pair: None,
        }
    }

    pub fn with_pair(mut self, pair: Option<LanguagePair>) -> Self {
        self.explicit_pair = pair;
        self
    }

    pub fn language_pair(&self, path: &Path) -> Result<LanguagePair> {
        match &self.explicit_pair {
            Some(pair) => Ok(pair.clone()),
            None => Ok(self.registry.pair_for_path(path)?),
        }
    }

    /// Compute the record for `path` without touching the report.
    pub fn analyze_file(&self, path: &Path) -> Result<(LanguagePair, AnalysisRecord)> {
        if !path.is_file() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        let pair = self.language_pair(path)?;
        log::info!("Analyzing {} ({})", path.display(), pair);
        let triples = io::read_triples(path)?;
        let record = self
            .analyzer
            .analyze(&AnalysisRecord::location_of(path), &triples, &pair)?;
        Ok((pair, record))
    }

    /// Analyze `path` and upsert its row into the report.
    pub fn process_file(&self, path: &Path) -> Result<AnalysisRecord> {
        let (pair, record) = self.analyze_file(path)?;
        log::debug!("Recording {} for {}", record.output_location, pair);
        self.store.record(record.clone())?;
        Ok(record)
    }
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub analyzed: Vec<AnalysisRecord>,
    pub skipped: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn analyzed_count(&self) -> usize {
        self.analyzed.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Process every file, reporting progress to `out`. Failures never stop the batch.
pub fn run_batch<W: Write>(
    processor: &FileProcessor<'_>,
    files: &[PathBuf],
    out: &mut W,
    quiet: bool,
) -> std::io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for path in files {
        match processor.process_file(path) {
            Ok(record) => {
                writeln!(out, "{} {}", tag_ok(), path.display())?;
                if !quiet {
                    io::output::write_record(out, &record)?;
                }
                summary.analyzed.push(record);
            }
            Err(e) => {
                let tag = if e.is_input_error() {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    tag_skip()
                } else {
                    log::error!("Analysis of {} failed: {}", path.display(), e);
                    tag_fail()
                };
                writeln!(out, "{} {}: {}", tag, path.display(), e)?;
                summary.skipped.push((path.clone(), e.to_string()));
            }
        }
    }

    Ok(summary)
}

/// Files to analyze for `input`: itself, or every multi-line file below it.
pub fn resolve_inputs(input: &Path, report_path: &Path) -> Result<Vec<PathBuf>> {
    if input.is_dir() {
        FileWalker::new(input.to_path_buf())
            .with_excluded(vec![report_path.to_path_buf()])
            .walk()
    } else {
        Ok(vec![input.to_path_buf()])
    }
}

pub fn handle_analyze(config: AnalyzeConfig) -> anyhow::Result<BatchSummary> {
    config.formatting_config.apply();
    config.settings.validate()?;

    let registry = config.settings.registry();
    let explicit_pair = config
        .pair
        .as_ref()
        .map(|code| registry.resolve(code))
        .transpose()?;

    let identifier = config.settings.build_identifier();
    let scorer = config.settings.build_scorer();
    let store = ReportStore::new(&config.settings.report_path);

    run_with(
        &config,
        &registry,
        &identifier,
        scorer.as_ref(),
        &store,
        explicit_pair,
    )
}

/// Run the batch with caller-supplied capabilities.
pub fn run_with(
    config: &AnalyzeConfig,
    registry: &LanguageRegistry,
    identifier: &dyn LanguageIdentifier,
    scorer: &dyn ParaphraseScorer,
    store: &ReportStore,
    explicit_pair: Option<LanguagePair>,
) -> anyhow::Result<BatchSummary> {
    let files = resolve_inputs(&config.input, store.path())?;
    log::info!("Found {} input file(s) under {}", files.len(), config.input.display());

    let analyzer =
        PairAnalyzer::new(identifier, scorer).with_batch_size(config.settings.batch_size);
    let processor = FileProcessor::new(registry, analyzer, store).with_pair(explicit_pair);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run_batch(&processor, &files, &mut out, config.quiet)?;
    io::output::write_summary(
        &mut out,
        summary.analyzed_count(),
        summary.skipped_count(),
        store.path(),
    )?;

    Ok(summary)
}
