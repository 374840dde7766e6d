//! Lenient CSV text parsing.
//!
//! The dialect is deliberately simple: lines split on `\n`, cells split on
//! `,`, each cell trimmed with one surrounding double quote removed. Quoted
//! commas are not supported.

use asset_model::{ColumnProfile, RawTable, SAMPLE_ROWS, cell};
use tracing::debug;

fn normalize_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

fn normalize_header(raw: &str) -> String {
    normalize_cell(raw.trim_start_matches('\u{feff}'))
}

/// Splits one line into normalized cells.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',').map(normalize_cell).collect()
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(String::is_empty)
}

/// Parses raw file text into a header row and non-blank data rows.
///
/// Text with no content yields an empty table.
pub fn parse_csv_text(text: &str) -> RawTable {
    if text.trim().is_empty() {
        return RawTable::default();
    }
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));
    let headers: Vec<String> = lines
        .next()
        .map(|line| line.split(',').map(normalize_header).collect())
        .unwrap_or_default();
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for line in lines {
        let row = parse_csv_line(line);
        if is_blank_row(&row) {
            skipped += 1;
            continue;
        }
        rows.push(row);
    }
    debug!(
        columns = headers.len(),
        rows = rows.len(),
        blank_rows = skipped,
        "parsed csv text"
    );
    RawTable { headers, rows }
}

/// Builds one profile per header cell, with samples from the first data rows.
pub fn build_column_profiles(table: &RawTable) -> Vec<ColumnProfile> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let mut profile = ColumnProfile::new(index, header.clone());
            profile.sample_values = table
                .rows
                .iter()
                .take(SAMPLE_ROWS)
                .map(|row| cell(row, index))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .collect();
            profile
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_quote_each_side() {
        assert_eq!(normalize_cell("  \"Server\"  "), "Server");
        assert_eq!(normalize_cell("\"\"quoted\"\""), "\"quoted\"");
        assert_eq!(normalize_cell("\"open"), "open");
        assert_eq!(normalize_cell("plain"), "plain");
    }

    #[test]
    fn header_bom_removed() {
        let table = parse_csv_text("\u{feff}Asset Name,Owner\nA,B\n");
        assert_eq!(table.headers, vec!["Asset Name", "Owner"]);
    }

    #[test]
    fn crlf_line_endings() {
        let table = parse_csv_text("A,B\r\n1,2\r\n\r\n");
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn empty_text_is_empty_table() {
        let table = parse_csv_text("");
        assert!(table.headers.is_empty());
        assert_eq!(table.row_count(), 0);
        assert!(build_column_profiles(&table).is_empty());
    }

    #[test]
    fn samples_skip_empty_cells_and_short_rows() {
        let table = parse_csv_text("A,B\n1,\n2\n3,z\n4,w\n");
        let profiles = build_column_profiles(&table);
        assert_eq!(profiles[0].sample_values, vec!["1", "2", "3"]);
        assert_eq!(profiles[1].sample_values, vec!["z"]);
        assert!(profiles.iter().all(|p| p.mapped_to.is_none()));
    }
}
