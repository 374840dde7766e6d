//! Acquisition date shape validation.

use std::sync::LazyLock;

use asset_model::FieldKey;
use regex::Regex;

use crate::issue::Issue;

/// `YYYY-MM-DD` by shape only; month and day ranges are not checked.
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex"));

pub fn check(field: FieldKey, value: &str) -> Option<Issue> {
    if field != FieldKey::AcquisitionDate || value.is_empty() {
        return None;
    }
    (!DATE_REGEX.is_match(value)).then_some(Issue::InvalidDate { field })
}
