//! Human-readable rendering of analysis results.

use crate::core::AnalysisRecord;
use colored::*;
use std::io::Write;

/// Write one file's metrics as an aligned two-column block.
pub fn write_record<W: Write>(writer: &mut W, record: &AnalysisRecord) -> std::io::Result<()> {
    let width = AnalysisRecord::COLUMNS
        .iter()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);

    writeln!(writer, "  {}", record.output_location.bold())?;
    for (name, value) in record.metrics() {
        writeln!(writer, "    {:<width$}  {:>6.2}%", name, value, width = width)?;
    }
    Ok(())
}

/// Final batch line, e.g. `3 analyzed, 1 skipped -> translation_stats.csv`.
pub fn write_summary<W: Write>(
    writer: &mut W,
    analyzed: usize,
    skipped: usize,
    report: &std::path::Path,
) -> std::io::Result<()> {
    let skipped_text = format!("{skipped} skipped");
    let skipped_text = if skipped > 0 {
        skipped_text.yellow()
    } else {
        skipped_text.normal()
    };
    writeln!(
        writer,
        "{} analyzed, {} -> {}",
        analyzed.to_string().green(),
        skipped_text,
        report.display()
    )
}
