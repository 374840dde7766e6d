//! Canonical asset fields.
//!
//! Every importable column ends up keyed by a [`FieldKey`]. The key is the
//! stable identifier (`acquisitionDate`), distinct from the human-facing
//! label (`Acquisition Date`) and from whatever header text the CSV used.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Canonical field an import column can be mapped to.
///
/// Variant order is declaration order: required fields first, then optional
/// fields. Sorting and `BTreeMap` iteration follow this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Name,
    AssetType,
    Owner,
    Classification,
    Description,
    Department,
    Vendor,
    AcquisitionDate,
    Confidentiality,
    Integrity,
    Availability,
    Location,
    SerialNumber,
    Tags,
}

impl FieldKey {
    /// All fields, required first, in declaration order.
    pub const ALL: [FieldKey; 14] = [
        FieldKey::Name,
        FieldKey::AssetType,
        FieldKey::Owner,
        FieldKey::Classification,
        FieldKey::Description,
        FieldKey::Department,
        FieldKey::Vendor,
        FieldKey::AcquisitionDate,
        FieldKey::Confidentiality,
        FieldKey::Integrity,
        FieldKey::Availability,
        FieldKey::Location,
        FieldKey::SerialNumber,
        FieldKey::Tags,
    ];

    /// Fields that must be mapped and populated for an import to proceed.
    pub const REQUIRED: [FieldKey; 4] = [
        FieldKey::Name,
        FieldKey::AssetType,
        FieldKey::Owner,
        FieldKey::Classification,
    ];

    /// Fields that may be mapped but are never required.
    pub const OPTIONAL: [FieldKey; 10] = [
        FieldKey::Description,
        FieldKey::Department,
        FieldKey::Vendor,
        FieldKey::AcquisitionDate,
        FieldKey::Confidentiality,
        FieldKey::Integrity,
        FieldKey::Availability,
        FieldKey::Location,
        FieldKey::SerialNumber,
        FieldKey::Tags,
    ];

    /// The canonical key string (`assetType`, `serialNumber`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::AssetType => "assetType",
            Self::Owner => "owner",
            Self::Classification => "classification",
            Self::Description => "description",
            Self::Department => "department",
            Self::Vendor => "vendor",
            Self::AcquisitionDate => "acquisitionDate",
            Self::Confidentiality => "confidentiality",
            Self::Integrity => "integrity",
            Self::Availability => "availability",
            Self::Location => "location",
            Self::SerialNumber => "serialNumber",
            Self::Tags => "tags",
        }
    }

    /// Human-readable label used in findings and listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Asset Name",
            Self::AssetType => "Asset Type",
            Self::Owner => "Asset Owner",
            Self::Classification => "Classification",
            Self::Description => "Description",
            Self::Department => "Department",
            Self::Vendor => "Vendor/Provider",
            Self::AcquisitionDate => "Acquisition Date",
            Self::Confidentiality => "Confidentiality",
            Self::Integrity => "Integrity",
            Self::Availability => "Availability",
            Self::Location => "Location",
            Self::SerialNumber => "Serial Number",
            Self::Tags => "Tags",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// True for confidentiality, integrity and availability.
    pub fn is_cia(self) -> bool {
        matches!(
            self,
            Self::Confidentiality | Self::Integrity | Self::Availability
        )
    }

    /// Looks up a field by its canonical key (case-sensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn descriptor(self) -> FieldDescriptor {
        FieldDescriptor {
            key: self,
            label: self.label(),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| ModelError::UnknownField(s.trim().to_string()))
    }
}

/// Static description of a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub label: &'static str,
}

impl FieldDescriptor {
    pub fn is_required(&self) -> bool {
        self.key.is_required()
    }
}

/// Descriptors for every field, required first.
pub fn all_fields() -> Vec<FieldDescriptor> {
    FieldKey::ALL.into_iter().map(FieldKey::descriptor).collect()
}
