//! Error types for the diff crate.

use propdiff_value::ValueError;

/// Errors that can occur during diff operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// A required argument was not supplied. A present-but-null tree is
    /// valid and does not trigger this.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Input could not be converted into the generic tree model.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
