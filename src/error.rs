//! Error types for the EDA leaves.
//!
//! Every validator returns one of two kinds: `InvalidType` when an argument
//! has the wrong shape altogether, `InvalidArgument` when the shape is right
//! but the content is not. The message is the full display text so callers
//! can match on its wording.

use thiserror::Error;

/// Errors raised by the analysis functions.
#[derive(Error, Debug)]
pub enum EdaError {
    /// Wrong argument type, e.g. a selection that is not a list of strings.
    #[error("{0}")]
    InvalidType(String),

    /// Right type but invalid content: duplicates, unknown columns,
    /// non-numeric columns, non-positive grid width.
    #[error("{0}")]
    InvalidArgument(String),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl EdaError {
    pub(crate) fn invalid_type(message: &str) -> Self {
        EdaError::InvalidType(message.to_string())
    }

    pub(crate) fn invalid_argument(message: &str) -> Self {
        EdaError::InvalidArgument(message.to_string())
    }

    /// Stable code for the error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidType(_) => "INVALID_TYPE",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Polars(_) => "POLARS",
        }
    }
}

/// Result alias for the analysis functions.
pub type EdaResult<T> = std::result::Result<T, EdaError>;
