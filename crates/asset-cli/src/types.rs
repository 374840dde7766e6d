use std::path::PathBuf;

use asset_map::MappingSummary;
use asset_model::{ColumnProfile, ImportedRecord, ValidationReport};

/// Outcome of the `import` command.
#[derive(Debug)]
pub struct ImportResult {
    pub file: PathBuf,
    pub row_count: usize,
    pub columns: Vec<ColumnProfile>,
    pub mapping: MappingSummary,
    pub report: ValidationReport,
    pub records: Vec<ImportedRecord>,
    /// Where records were written, if anywhere.
    pub output: Option<PathBuf>,
    /// True when blocking errors stopped the import.
    pub blocked: bool,
}
