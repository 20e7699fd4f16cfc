//! The persisted statistics table, one row per analyzed file.
//!
//! Rows are keyed by `output_location` and kept in first-insertion order.
//! The whole table is read before and rewritten after every update; there is
//! no locking, so concurrent writers race and the last one wins.

use crate::core::AnalysisRecord;
use crate::errors::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const DEFAULT_REPORT_PATH: &str = "translation_stats.csv";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    rows: Vec<AnalysisRecord>,
}

impl ReportTable {
    pub fn new(rows: Vec<AnalysisRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[AnalysisRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, output_location: &str) -> Option<&AnalysisRecord> {
        self.rows
            .iter()
            .find(|row| row.output_location == output_location)
    }
}

/// Insert `record`, or replace the row with the same `output_location` in place.
pub fn upsert(table: ReportTable, record: AnalysisRecord) -> ReportTable {
    let mut rows = table.rows;
    match rows
        .iter_mut()
        .find(|row| row.output_location == record.output_location)
    {
        Some(existing) => *existing = record,
        None => rows.push(record),
    }
    ReportTable { rows }
}

/// A report table backed by a CSV file.
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full table; a missing file is an empty table.
    pub fn load(&self) -> Result<ReportTable> {
        if !self.path.exists() {
            return Ok(ReportTable::default());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| Error::report(&self.path, e.to_string()))?;
        let rows = reader
            .deserialize::<AnalysisRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::report(&self.path, e.to_string()))?;
        Ok(ReportTable::new(rows))
    }

    /// Rewrite the file with the full table, header included.
    ///
    /// The table goes to a temporary file next to the report which then
    /// replaces it, so an interrupted save leaves the previous report intact.
    pub fn save(&self, table: &ReportTable) -> Result<()> {
        self.replace_contents(|file| write_table(file, table))
    }

    fn replace_contents<F>(&self, fill: F) -> Result<()>
    where
        F: FnOnce(&mut NamedTempFile) -> Result<()>,
    {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::file_system("cannot create report directory", parent, e)
                })?;
                parent
            }
            None => Path::new("."),
        };

        let mut temp = tempfile::Builder::new()
            .prefix(".teatool-report-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| Error::file_system("cannot create temporary report", dir, e))?;

        // Dropping `temp` on error removes the partial file.
        fill(&mut temp)?;
        temp.as_file()
            .sync_all()
            .map_err(|e| Error::file_system("cannot sync temporary report", temp.path(), e))?;
        temp.persist(&self.path)
            .map_err(|e| Error::file_system("cannot replace report", &self.path, e.error))?;
        Ok(())
    }

    /// Load, upsert `record`, save. Returns the table as written.
    pub fn record(&self, record: AnalysisRecord) -> Result<ReportTable> {
        let current = self.load()?;
        if current.get(&record.output_location).is_some() {
            log::debug!("Replacing row for {}", record.output_location);
        }
        let table = upsert(current, record);
        self.save(&table)?;
        log::debug!(
            "Report {} now holds {} rows",
            self.path.display(),
            table.len()
        );
        Ok(table)
    }
}

fn write_table<W: Write>(writer: W, table: &ReportTable) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if table.is_empty() {
        writer.write_record(AnalysisRecord::COLUMNS)?;
    }
    for row in table.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
