//! Downloadable import template.

use std::fs;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{IngestError, Result};

/// File name offered for the template.
pub const TEMPLATE_FILE_NAME: &str = "asset-register-template.csv";

pub const TEMPLATE_HEADERS: [&str; 13] = [
    "Asset Name",
    "Asset Type",
    "Asset Owner",
    "Classification",
    "Description",
    "Department",
    "Vendor/Provider",
    "Acquisition Date",
    "Confidentiality",
    "Integrity",
    "Availability",
    "Location",
    "Tags",
];

const TEMPLATE_SAMPLE_ROW: [&str; 13] = [
    "Customer Database Server",
    "Hardware",
    "john.smith@company.com",
    "Confidential",
    "Primary database server for customer records",
    "IT Operations",
    "Dell Technologies",
    "2023-01-15",
    "5",
    "5",
    "4",
    "Data Center A",
    "production,database,critical",
];

/// Builds the template: header row plus one sample row, every field quoted.
///
/// Rows are joined with `\n` and the text has no trailing newline.
pub fn template_csv() -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(TEMPLATE_HEADERS)?;
    writer.write_record(TEMPLATE_SAMPLE_ROW)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| IngestError::Csv(err.into_error().into()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.trim_end_matches('\n').to_string())
}

/// Writes the template into `dir` under [`TEMPLATE_FILE_NAME`].
pub fn write_template(dir: &Path) -> Result<std::path::PathBuf> {
    let path = dir.join(TEMPLATE_FILE_NAME);
    let text = template_csv()?;
    fs::write(&path, text).map_err(|source| IngestError::FileWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
