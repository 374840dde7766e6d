//! Normalized asset records produced by the import.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldKey;

/// CIA value assumed when a score is missing or unusable.
pub const DEFAULT_CIA_SCORE: i64 = 3;

/// A coerced field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    List(Vec<String>),
    Text(String),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    #[default]
    Active,
}

/// One imported asset.
///
/// Serializes as a flat JSON object: canonical field keys followed by
/// `id`, `assetValue` and `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedRecord {
    #[serde(flatten)]
    pub fields: BTreeMap<FieldKey, FieldValue>,
    /// Sequential `ASSET-NNN` identifier.
    pub id: String,
    /// Confidentiality + integrity + availability.
    pub asset_value: i64,
    pub status: AssetStatus,
}

impl ImportedRecord {
    pub fn get(&self, field: FieldKey) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn text(&self, field: FieldKey) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    pub fn number(&self, field: FieldKey) -> Option<i64> {
        self.get(field).and_then(FieldValue::as_number)
    }

    pub fn tags(&self) -> Option<&[String]> {
        self.get(FieldKey::Tags).and_then(FieldValue::as_list)
    }
}
