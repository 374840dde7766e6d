//! Error types for mapping operations.

use std::fmt;

/// Errors from mapping operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// No column with this header text.
    ColumnNotFound(String),
    /// No column at this position.
    ColumnIndexOutOfRange(usize),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnNotFound(c) => write!(f, "Column not found: {c}"),
            Self::ColumnIndexOutOfRange(i) => write!(f, "Column index out of range: {i}"),
        }
    }
}

impl std::error::Error for MappingError {}
