//! Import file loading.

use std::fs;
use std::path::Path;

use asset_model::RawTable;
use tracing::debug;

use crate::csv_table::parse_csv_text;
use crate::error::{IngestError, Result};

/// Suggested upper bound for import files. Not enforced.
pub const ADVISORY_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Reads an import file as UTF-8 text.
pub fn read_import_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let len = bytes.len();
    let text = String::from_utf8(bytes).map_err(|_| IngestError::Decode {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), bytes = len, "read import file");
    Ok(text)
}

/// Reads and parses an import file.
pub fn read_import_table(path: &Path) -> Result<RawTable> {
    read_import_text(path).map(|text| parse_csv_text(&text))
}
