use thiserror::Error;

/// Errors produced by value conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("serialization error: {0}")]
    Serialization(String),
}
