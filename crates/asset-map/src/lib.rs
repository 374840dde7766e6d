#![deny(unsafe_code)]

pub mod engine;
pub mod error;
pub mod patterns;
pub mod state;
pub mod utils;

pub use engine::{auto_map_all, suggest};
pub use error::MappingError;
pub use patterns::{FIELD_PATTERNS, patterns_for};
pub use state::{MappingState, MappingSummary};
