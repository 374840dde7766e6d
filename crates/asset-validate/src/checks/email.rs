//! Owner email shape validation.
//!
//! The owner field takes either a plain name or an email address, so only
//! values containing `@` are checked.

use std::sync::LazyLock;

use asset_model::FieldKey;
use regex::Regex;

use crate::issue::Issue;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

pub fn check(field: FieldKey, value: &str) -> Option<Issue> {
    if field != FieldKey::Owner || value.is_empty() || !value.contains('@') {
        return None;
    }
    (!EMAIL_REGEX.is_match(value)).then_some(Issue::InvalidEmail { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_not_checked() {
        assert!(check(FieldKey::Owner, "not-an-email").is_none());
        assert!(check(FieldKey::Owner, "Jane Doe").is_none());
    }

    #[test]
    fn malformed_addresses_warn() {
        assert!(check(FieldKey::Owner, "a@b.com").is_none());
        assert!(check(FieldKey::Owner, "a@b").is_some());
        assert!(check(FieldKey::Owner, "a @b.com").is_some());
        assert!(check(FieldKey::Owner, "@b.com").is_some());
        assert!(check(FieldKey::Vendor, "a@b").is_none());
    }
}
