//! Validation check modules.
//!
//! Each module checks one rule. Cell checks are independent: all of them
//! run for every mapped cell and each may contribute an issue.

mod dates;
mod email;
mod required;
pub mod score;

use asset_model::{ColumnProfile, FieldKey};

use crate::issue::Issue;

/// Run every cell rule for one value of `field`, in rule order.
pub fn check_cell(field: FieldKey, value: &str) -> Vec<Issue> {
    let value = value.trim();
    [
        required::check(field, value),
        dates::check(field, value),
        score::check(field, value),
        email::check(field, value),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Required fields missing from the mapping.
pub fn check_columns(columns: &[&ColumnProfile]) -> Vec<Issue> {
    required::check_mapping(columns)
}
