//! Error types for asset import ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an import file or writing the template.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the import file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8 text.
    #[error("file is not valid UTF-8 text: {path}")]
    Decode { path: PathBuf },

    /// Failed to write a file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize CSV output.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
