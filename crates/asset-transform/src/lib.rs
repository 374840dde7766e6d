//! Builds normalized asset records from validated, mapped rows.
//!
//! Records are built by folding over mapped columns in index order, so
//! when two columns share a target field the rightmost one wins. No
//! validation happens here; callers run the validation gate first.

#![deny(unsafe_code)]

pub mod coerce;
pub mod ids;

use std::collections::BTreeMap;

use asset_model::{
    AssetStatus, ColumnProfile, DEFAULT_CIA_SCORE, FieldKey, FieldValue, ImportedRecord,
    RawTable, cell, mapped_columns,
};
use tracing::{debug, info};

pub use coerce::{coerce, coerce_score, split_tags};
pub use ids::{ASSET_ID_PREFIX, asset_id};

/// Sum of the three CIA scores, each defaulting when absent. Saturates
/// instead of overflowing.
pub fn asset_value(fields: &BTreeMap<FieldKey, FieldValue>) -> i64 {
    [
        FieldKey::Confidentiality,
        FieldKey::Integrity,
        FieldKey::Availability,
    ]
    .into_iter()
    .map(|field| {
        fields
            .get(&field)
            .and_then(FieldValue::as_number)
            .unwrap_or(DEFAULT_CIA_SCORE)
    })
    .fold(0i64, i64::saturating_add)
}

/// Builds the record for one data row.
pub fn transform_row(
    row_index: usize,
    row: &[String],
    columns: &[&ColumnProfile],
) -> ImportedRecord {
    let fields = columns.iter().fold(BTreeMap::new(), |mut fields, column| {
        if let Some(field) = column.mapped_to
            && fields
                .insert(field, coerce(field, cell(row, column.index)))
                .is_some()
        {
            debug!(row = row_index, field = %field, "later column overwrote field");
        }
        fields
    });
    ImportedRecord {
        id: asset_id(row_index),
        asset_value: asset_value(&fields),
        status: AssetStatus::Active,
        fields,
    }
}

/// Builds one record per data row, in row order.
pub fn transform(rows: &[Vec<String>], columns: &[ColumnProfile]) -> Vec<ImportedRecord> {
    let mapped = mapped_columns(columns);
    let records: Vec<ImportedRecord> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| transform_row(idx, row, &mapped))
        .collect();
    info!(records = records.len(), "transformed import rows");
    records
}

/// Builds records for every data row of a parsed table.
pub fn transform_table(table: &RawTable, columns: &[ColumnProfile]) -> Vec<ImportedRecord> {
    transform(&table.rows, columns)
}
