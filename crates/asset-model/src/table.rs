//! Parsed CSV grid and per-column profiles.

use serde::{Deserialize, Serialize};

use crate::field::FieldKey;

/// Number of data rows sampled for [`ColumnProfile::sample_values`].
pub const SAMPLE_ROWS: usize = 3;

/// Rectangular-ish grid of string cells.
///
/// `headers` is line 0 of the file; `rows` are the data rows with fully
/// blank rows already removed. Rows may be ragged: use [`RawTable::cell`]
/// or [`cell`] to read a column that a short row does not have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Cell at `(row, column)`, or `""` when either index is out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows.get(row).map_or("", |cells| cell(cells, column))
    }
}

/// Reads a cell from a possibly short row.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str)
}

/// One source column as seen by the mapping step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    /// Zero-based position in the header row.
    pub index: usize,
    /// Raw header text.
    pub name: String,
    /// Up to three non-empty values taken from the first three data rows.
    pub sample_values: Vec<String>,
    /// Target field, or `None` for "don't import".
    pub mapped_to: Option<FieldKey>,
}

impl ColumnProfile {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            sample_values: Vec::new(),
            mapped_to: None,
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.mapped_to.is_some()
    }
}

/// The mapped subset of `columns`, in column-index order.
pub fn mapped_columns(columns: &[ColumnProfile]) -> Vec<&ColumnProfile> {
    let mut mapped: Vec<&ColumnProfile> = columns.iter().filter(|c| c.is_mapped()).collect();
    mapped.sort_by_key(|c| c.index);
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_read_as_empty() {
        let table = RawTable {
            headers: vec!["A".into(), "B".into(), "C".into()],
            rows: vec![vec!["1".into()], vec!["2".into(), "x".into(), "y".into()]],
        };
        assert_eq!(table.cell(0, 0), "1");
        assert_eq!(table.cell(0, 2), "");
        assert_eq!(table.cell(1, 2), "y");
        assert_eq!(table.cell(9, 0), "");
    }

    #[test]
    fn mapped_columns_sorted_by_index() {
        let mut a = ColumnProfile::new(2, "Owner");
        a.mapped_to = Some(FieldKey::Owner);
        let b = ColumnProfile::new(1, "Junk");
        let mut c = ColumnProfile::new(0, "Name");
        c.mapped_to = Some(FieldKey::Name);
        let columns = vec![a, b, c];
        let indices: Vec<usize> = mapped_columns(&columns).iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
