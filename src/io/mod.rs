pub mod output;
pub mod report;
pub mod triples;
pub mod walker;

pub use report::{upsert, ReportStore, ReportTable, DEFAULT_REPORT_PATH};
pub use triples::{parse_triples, read_triples};
pub use walker::{count_lines, FileWalker};
