//! Utility functions for mapping operations.

/// Normalizes header text for pattern lookup: trimmed and lower-cased.
///
/// Separators are left alone so `asset_name` and `asset name` stay distinct
/// strings; the pattern table lists both spellings where it matters.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}
