//! Validation for mapped asset import rows.
//!
//! [`validate`] produces an ordered [`ValidationReport`]:
//!
//! 1. one `row: 0` error per required field with no mapped column;
//! 2. per data row in order, per mapped column in index order, every cell
//!    rule that fires.
//!
//! The import may proceed only when the report has no errors
//! ([`can_proceed`]). Warnings never block.

#![deny(unsafe_code)]

pub mod checks;
pub mod issue;

use asset_model::{ColumnProfile, RawTable, ValidationReport, cell, mapped_columns};
use tracing::{debug, info};

pub use checks::score::{MAX_SCORE, MIN_SCORE};
pub use issue::Issue;

/// Offset from a zero-based data row index to the reported row number
/// (one for the header line, one for one-based numbering).
pub const ROW_NUMBER_OFFSET: usize = 2;

/// Validate `rows` (data rows, header excluded) against the mapped columns.
///
/// Unmapped columns in `columns` are ignored.
pub fn validate(rows: &[Vec<String>], columns: &[ColumnProfile]) -> ValidationReport {
    let mapped = mapped_columns(columns);
    let mut findings: Vec<_> = checks::check_columns(&mapped)
        .into_iter()
        .map(|issue| issue.into_finding(0))
        .collect();

    for (row_idx, row) in rows.iter().enumerate() {
        let row_number = row_idx + ROW_NUMBER_OFFSET;
        for column in &mapped {
            let Some(field) = column.mapped_to else {
                continue;
            };
            for issue in checks::check_cell(field, cell(row, column.index)) {
                findings.push(issue.into_finding(row_number));
            }
        }
    }

    let report = ValidationReport::new(findings);
    info!(
        rows = rows.len(),
        mapped_columns = mapped.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated import rows"
    );
    report
}

/// Validate every data row of a parsed table.
pub fn validate_table(table: &RawTable, columns: &[ColumnProfile]) -> ValidationReport {
    validate(&table.rows, columns)
}

/// Gate: true when the report contains no blocking errors.
pub fn can_proceed(report: &ValidationReport) -> bool {
    let proceed = !report.has_errors();
    debug!(proceed, "import gate");
    proceed
}
