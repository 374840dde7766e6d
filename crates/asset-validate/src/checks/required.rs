//! Required field checks.
//!
//! Two passes: every required field must have a mapped column, and every
//! mapped required cell must be non-empty.

use asset_model::{ColumnProfile, FieldKey};

use crate::issue::Issue;

/// Required fields with no mapped column, in declaration order.
pub fn check_mapping(columns: &[&ColumnProfile]) -> Vec<Issue> {
    FieldKey::REQUIRED
        .into_iter()
        .filter(|field| !columns.iter().any(|c| c.mapped_to == Some(*field)))
        .map(|field| Issue::RequiredNotMapped { field })
        .collect()
}

pub fn check(field: FieldKey, value: &str) -> Option<Issue> {
    (field.is_required() && value.trim().is_empty()).then_some(Issue::RequiredEmpty { field })
}
