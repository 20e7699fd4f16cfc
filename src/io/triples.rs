//! Reading headerless `source \t translation \t reference` files.

use crate::core::{TranslationTriple, TripleColumns};
use crate::errors::{Error, Result};
use std::io::Read;
use std::path::Path;

pub const EXPECTED_COLUMNS: usize = 3;

/// Parse tab-separated triples. Every row, including the first, is data.
///
/// Quotes carry no meaning: model outputs routinely start with `"` and are
/// kept verbatim.
pub fn parse_triples<R: Read>(reader: R) -> Result<TripleColumns> {
    let mut tsv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut triples = Vec::new();
    for (idx, result) in tsv.records().enumerate() {
        let record = result?;
        if record.len() != EXPECTED_COLUMNS {
            return Err(Error::Shape {
                row: idx + 1,
                found: record.len(),
                expected: EXPECTED_COLUMNS,
            });
        }
        triples.push(TranslationTriple::new(&record[0], &record[1], &record[2]));
    }

    Ok(triples.into_iter().collect())
}

pub fn read_triples(path: &Path) -> Result<TripleColumns> {
    if !path.is_file() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)
        .map_err(|e| Error::file_system("cannot open input", path, e))?;
    parse_triples(std::io::BufReader::new(file))
}
