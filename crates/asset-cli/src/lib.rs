//! CLI library components for the asset register import.

pub mod logging;
pub mod overrides;
pub mod summary;
pub mod types;
