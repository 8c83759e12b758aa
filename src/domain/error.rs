//! Domain-level errors

use thiserror::Error;

/// Errors raised by the tree engine.
///
/// Lookups never fail: an unknown id yields an empty result. Only malformed
/// configuration, malformed input and cyclic parent references are surfaced.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cycle detected in parent references at id: {id}")]
    CycleDetected { id: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("invalid record at position {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("cannot parse record set: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TreeError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
