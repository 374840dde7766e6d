//! CIA score range validation.

use asset_model::{FieldKey, parse_leading_int};

use crate::issue::Issue;

pub const MIN_SCORE: i64 = 1;
pub const MAX_SCORE: i64 = 5;

pub fn check(field: FieldKey, value: &str) -> Option<Issue> {
    if !field.is_cia() || value.is_empty() {
        return None;
    }
    match parse_leading_int(value) {
        Some(score) if (MIN_SCORE..=MAX_SCORE).contains(&score) => None,
        _ => Some(Issue::ScoreOutOfRange { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        assert!(check(FieldKey::Integrity, "1").is_none());
        assert!(check(FieldKey::Integrity, "5").is_none());
        assert!(check(FieldKey::Integrity, "0").is_some());
        assert!(check(FieldKey::Integrity, "7").is_some());
        assert!(check(FieldKey::Integrity, "high").is_some());
        assert!(check(FieldKey::Integrity, "").is_none());
        assert!(check(FieldKey::Location, "7").is_none());
    }
}
