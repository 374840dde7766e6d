//! Validation issue types.
//!
//! Each variant carries only the field it concerns; severity and message
//! text are derived from the variant.

use asset_model::{FieldKey, Severity, ValidationFinding};

/// Validation issue for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    /// Required field has no mapped column.
    RequiredNotMapped { field: FieldKey },
    /// Required field is mapped but the cell is empty.
    RequiredEmpty { field: FieldKey },
    /// Date is not `YYYY-MM-DD`.
    InvalidDate { field: FieldKey },
    /// CIA score is not an integer in 1..=5.
    ScoreOutOfRange { field: FieldKey },
    /// Value contains `@` but is not a plausible email address.
    InvalidEmail { field: FieldKey },
}

impl Issue {
    pub fn field(&self) -> FieldKey {
        match self {
            Self::RequiredNotMapped { field }
            | Self::RequiredEmpty { field }
            | Self::InvalidDate { field }
            | Self::ScoreOutOfRange { field }
            | Self::InvalidEmail { field } => *field,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::RequiredNotMapped { .. } | Self::RequiredEmpty { .. } => Severity::Error,
            Self::InvalidDate { .. } | Self::ScoreOutOfRange { .. } | Self::InvalidEmail { .. } => {
                Severity::Warning
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::RequiredNotMapped { field } => {
                format!("Required field '{}' is not mapped", field.label())
            }
            Self::RequiredEmpty { field } => {
                format!("Required field '{}' is empty", field.label())
            }
            Self::InvalidDate { .. } => "Invalid date format. Expected YYYY-MM-DD".to_string(),
            Self::ScoreOutOfRange { .. } => "Value must be between 1 and 5".to_string(),
            Self::InvalidEmail { .. } => "Invalid email format".to_string(),
        }
    }

    /// Converts the issue into a finding reported at `row`.
    pub fn into_finding(self, row: usize) -> ValidationFinding {
        ValidationFinding {
            row,
            column: self.field().label().to_string(),
            error: self.message(),
            severity: self.severity(),
        }
    }
}
