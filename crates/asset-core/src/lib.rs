//! Import workflow for the asset register.
//!
//! [`ImportSession`] drives one upload through the stages:
//!
//! - parse (`asset-ingest`)
//! - map (`asset-map`)
//! - validate (`asset-validate`)
//! - transform (`asset-transform`)
//!
//! Transformation only runs once validation reports no blocking errors.

#![deny(unsafe_code)]

pub mod error;
pub mod options;
pub mod session;

pub use error::{Result, SessionError};
pub use options::ImportOptions;
pub use session::{ImportSession, SessionState, UploadTicket};
