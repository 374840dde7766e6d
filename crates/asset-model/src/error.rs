use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown field key: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
