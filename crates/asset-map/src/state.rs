//! Mapping state management for the interactive mapping step.
//!
//! A [`MappingState`] owns the column profiles of one upload. Auto-mapping
//! and manual selections both write `mapped_to`; the last writer wins.

use std::collections::BTreeMap;

use asset_model::{ColumnProfile, FieldKey, mapped_columns};
use serde::Serialize;
use tracing::debug;

use crate::engine::auto_map_all;
use crate::error::MappingError;

#[derive(Debug, Clone, Default)]
pub struct MappingState {
    columns: Vec<ColumnProfile>,
}

impl MappingState {
    pub fn new(columns: Vec<ColumnProfile>) -> Self {
        Self { columns }
    }

    /// Column profiles in header order.
    pub fn columns(&self) -> &[ColumnProfile] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<ColumnProfile> {
        self.columns
    }

    /// Columns slated for import, in index order.
    pub fn mapped_columns(&self) -> Vec<&ColumnProfile> {
        mapped_columns(&self.columns)
    }

    /// Runs the heuristic mapper over every column.
    pub fn auto_map(&mut self) -> usize {
        auto_map_all(&mut self.columns)
    }

    /// Sets the target of the column at `index`; `None` means "don't import".
    pub fn set_mapping(
        &mut self,
        index: usize,
        field: Option<FieldKey>,
    ) -> Result<(), MappingError> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.index == index)
            .ok_or(MappingError::ColumnIndexOutOfRange(index))?;
        debug!(column = %column.name, field = ?field, "manual mapping");
        column.mapped_to = field;
        Ok(())
    }

    /// Sets the target of the first column whose header equals `name`
    /// (trimmed, case-insensitive).
    pub fn set_mapping_by_name(
        &mut self,
        name: &str,
        field: Option<FieldKey>,
    ) -> Result<(), MappingError> {
        let wanted = name.trim();
        let index = self
            .columns
            .iter()
            .find(|c| c.name.trim().eq_ignore_ascii_case(wanted))
            .map(|c| c.index)
            .ok_or_else(|| MappingError::ColumnNotFound(wanted.to_string()))?;
        self.set_mapping(index, field)
    }

    /// Clears every mapping.
    pub fn clear(&mut self) {
        for column in &mut self.columns {
            column.mapped_to = None;
        }
    }

    /// Columns currently mapped to `field`, in index order.
    pub fn columns_for(&self, field: FieldKey) -> Vec<&ColumnProfile> {
        self.mapped_columns()
            .into_iter()
            .filter(|c| c.mapped_to == Some(field))
            .collect()
    }

    pub fn summary(&self) -> MappingSummary {
        let mut targets: BTreeMap<FieldKey, usize> = BTreeMap::new();
        for column in self.mapped_columns() {
            if let Some(field) = column.mapped_to {
                *targets.entry(field).or_insert(0) += 1;
            }
        }
        let missing_required: Vec<FieldKey> = FieldKey::REQUIRED
            .into_iter()
            .filter(|field| !targets.contains_key(field))
            .collect();
        MappingSummary {
            total_columns: self.columns.len(),
            mapped: targets.values().sum(),
            required_total: FieldKey::REQUIRED.len(),
            required_mapped: FieldKey::REQUIRED.len() - missing_required.len(),
            missing_required,
            duplicate_targets: targets
                .into_iter()
                .filter(|(_, count)| *count > 1)
                .map(|(field, _)| field)
                .collect(),
        }
    }
}

/// Summary of mapping counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSummary {
    /// Number of source columns.
    pub total_columns: usize,
    /// Columns with a target field.
    pub mapped: usize,
    pub required_total: usize,
    /// Required fields with at least one mapped column.
    pub required_mapped: usize,
    pub missing_required: Vec<FieldKey>,
    /// Fields fed by more than one column; the rightmost column wins.
    pub duplicate_targets: Vec<FieldKey>,
}

impl MappingSummary {
    pub fn all_required_mapped(&self) -> bool {
        self.missing_required.is_empty()
    }
}
