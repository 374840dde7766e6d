/// Prefix of generated asset identifiers.
pub const ASSET_ID_PREFIX: &str = "ASSET-";

/// Identifier for the zero-based data row `row_index`: `ASSET-001`, ...
///
/// Numbers are zero-padded to three digits and grow wider past 999.
pub fn asset_id(row_index: usize) -> String {
    format!("{ASSET_ID_PREFIX}{:03}", row_index + 1)
}
