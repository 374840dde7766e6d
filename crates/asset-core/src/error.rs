//! Error types for import sessions.

use asset_ingest::IngestError;
use asset_map::MappingError;
use thiserror::Error;

use crate::session::SessionState;

#[derive(Debug, Error)]
pub enum SessionError {
    /// A read completed for an upload that is no longer current.
    #[error("upload {ticket} is stale; current upload is {current:?}")]
    StaleUpload { ticket: u64, current: Option<u64> },

    /// The file could not be read or decoded.
    #[error(transparent)]
    Read(#[from] IngestError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// The action is not allowed in the current state.
    #[error("cannot {action} while session is {state}")]
    InvalidState {
        action: &'static str,
        state: SessionState,
    },

    /// Validation found errors; the session is back at the mapping step.
    #[error("import blocked by {count} validation error(s)")]
    BlockingErrors { count: usize },
}

pub type Result<T> = std::result::Result<T, SessionError>;
