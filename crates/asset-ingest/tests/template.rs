use asset_ingest::{
    TEMPLATE_FILE_NAME, TEMPLATE_HEADERS, parse_csv_text, template_csv, write_template,
};

#[test]
fn template_is_fully_quoted() {
    let csv = template_csv().expect("template");
    insta::assert_snapshot!(csv, @r#"
    "Asset Name","Asset Type","Asset Owner","Classification","Description","Department","Vendor/Provider","Acquisition Date","Confidentiality","Integrity","Availability","Location","Tags"
    "Customer Database Server","Hardware","john.smith@company.com","Confidential","Primary database server for customer records","IT Operations","Dell Technologies","2023-01-15","5","5","4","Data Center A","production,database,critical"
    "#);
}

#[test]
fn template_headers_parse_back() {
    let table = parse_csv_text(&template_csv().expect("template"));
    assert_eq!(table.headers, TEMPLATE_HEADERS.to_vec());
    assert_eq!(table.row_count(), 1);
}

#[test]
fn template_written_to_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_template(dir.path()).expect("write template");
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(TEMPLATE_FILE_NAME));
    let text = std::fs::read_to_string(&path).expect("read template");
    assert!(text.starts_with("\"Asset Name\""));
    assert!(!text.ends_with('\n'));
}
