//! Per-field value coercion.

use asset_model::{DEFAULT_CIA_SCORE, FieldKey, FieldValue, parse_leading_int};

/// CIA score as stored: the parsed integer, or the default when the cell
/// does not parse or parses to zero. Out-of-range values are kept as is.
pub fn coerce_score(value: &str) -> i64 {
    match parse_leading_int(value) {
        Some(score) if score != 0 => score,
        _ => DEFAULT_CIA_SCORE,
    }
}

/// Splits a tags cell on commas, trimming each segment.
pub fn split_tags(value: &str) -> Vec<String> {
    value.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Coerces one cell for `field`.
pub fn coerce(field: FieldKey, value: &str) -> FieldValue {
    let value = value.trim();
    if field.is_cia() {
        FieldValue::Number(coerce_score(value))
    } else if field == FieldKey::Tags && !value.is_empty() {
        FieldValue::List(split_tags(value))
    } else {
        FieldValue::Text(value.to_string())
    }
}
