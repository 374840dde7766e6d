//! Heuristic header matching.

use asset_model::{ColumnProfile, FieldKey};
use tracing::debug;

use crate::patterns::FIELD_PATTERNS;
use crate::utils::normalize_header;

/// Suggests a canonical field for a raw column header.
///
/// Returns the first field in pattern-table order with a pattern that
/// occurs in the normalized header, or `None` when nothing matches.
pub fn suggest(column_name: &str) -> Option<FieldKey> {
    let normalized = normalize_header(column_name);
    if normalized.is_empty() {
        return None;
    }
    FIELD_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| normalized.contains(p)))
        .map(|(field, _)| *field)
}

/// Applies [`suggest`] to every column in index order.
///
/// Non-null suggestions overwrite the current mapping, manual choices
/// included. Columns without a suggestion keep whatever they had. Returns
/// the number of columns whose mapping changed.
pub fn auto_map_all(columns: &mut [ColumnProfile]) -> usize {
    let mut order: Vec<usize> = (0..columns.len()).collect();
    order.sort_by_key(|&idx| columns[idx].index);
    let mut changed = 0usize;
    for idx in order {
        let column = &mut columns[idx];
        let Some(field) = suggest(&column.name) else {
            continue;
        };
        if column.mapped_to != Some(field) {
            debug!(column = %column.name, field = %field, "auto-mapped column");
            column.mapped_to = Some(field);
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_variants_map_to_name() {
        assert_eq!(suggest("Asset_Name"), Some(FieldKey::Name));
        assert_eq!(suggest("asset name"), Some(FieldKey::Name));
        assert_eq!(suggest("  ASSET_NAME  "), Some(FieldKey::Name));
        assert_eq!(suggest("System Title"), Some(FieldKey::Name));
    }

    #[test]
    fn unknown_header_has_no_suggestion() {
        assert_eq!(suggest("foobar"), None);
        assert_eq!(suggest(""), None);
        assert_eq!(suggest("   "), None);
    }

    #[test]
    fn earlier_field_wins_on_overlap() {
        // "owner name" matches both name and owner patterns.
        assert_eq!(suggest("Owner Name"), Some(FieldKey::Name));
        assert_eq!(suggest("Owner"), Some(FieldKey::Owner));
    }

    #[test]
    fn auto_map_overwrites_manual_choice() {
        let mut columns = vec![ColumnProfile::new(0, "Asset Name"), ColumnProfile::new(1, "xyz")];
        columns[0].mapped_to = Some(FieldKey::Description);
        columns[1].mapped_to = Some(FieldKey::Location);

        assert_eq!(auto_map_all(&mut columns), 1);
        assert_eq!(columns[0].mapped_to, Some(FieldKey::Name));
        assert_eq!(columns[1].mapped_to, Some(FieldKey::Location));

        assert_eq!(auto_map_all(&mut columns), 0);
    }
}
