use std::fs;

use asset_ingest::{
    IngestError, build_column_profiles, parse_csv_text, read_import_table, read_import_text,
};
use proptest::prelude::*;

#[test]
fn reads_table_and_builds_profiles() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("assets.csv");
    fs::write(&path, "Asset Name,Owner,Type\nServer1,a@b.com,\n\n,,\nLaptop,\"bob\",Hardware\n")
        .expect("write file");

    let table = read_import_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["Asset Name", "Owner", "Type"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[1], vec!["Laptop", "bob", "Hardware"]);

    let profiles = build_column_profiles(&table);
    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0].sample_values, vec!["Server1", "Laptop"]);
    assert_eq!(profiles[2].sample_values, vec!["Hardware"]);
    assert_eq!(profiles[2].index, 2);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_import_text(&dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
}

#[test]
fn non_utf8_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("latin1.csv");
    fs::write(&path, [b'N', b'a', b'm', b'e', b'\n', 0xff, 0xfe, b'x']).expect("write file");
    let err = read_import_text(&path).unwrap_err();
    assert!(matches!(err, IngestError::Decode { .. }));
}

#[test]
fn ragged_rows_are_kept() {
    let table = parse_csv_text("A,B,C\n1\n2,3,4,5\n");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 2), "");
    assert_eq!(table.rows[1].len(), 4);
}

fn cell_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{0,8}"
}

proptest! {
    #[test]
    fn profile_count_matches_header_cells(
        headers in prop::collection::vec("[A-Za-z][A-Za-z ]{0,8}", 1..8),
        rows in prop::collection::vec(prop::collection::vec(cell_text(), 0..10), 0..12),
    ) {
        let mut text = headers.join(",");
        for row in &rows {
            text.push('\n');
            text.push_str(&row.join(","));
        }
        let table = parse_csv_text(&text);
        prop_assert_eq!(build_column_profiles(&table).len(), headers.len());
    }

    #[test]
    fn blank_rows_never_reach_the_table(
        rows in prop::collection::vec(prop::collection::vec(cell_text(), 1..5), 0..12),
    ) {
        let mut text = String::from("A,B");
        for row in &rows {
            text.push('\n');
            text.push_str(&row.join(","));
        }
        let table = parse_csv_text(&text);
        let expected = rows
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .count();
        prop_assert_eq!(table.row_count(), expected);
        prop_assert!(table.rows.iter().all(|row| row.iter().any(|cell| !cell.is_empty())));
    }
}
