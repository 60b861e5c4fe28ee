//! Engine error types

use thiserror::Error;

/// Errors produced by the aggregation engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Configuration rejected before any work started
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected
        reason: String,
    },

    /// A chunk worker failed; the whole benchmark iteration is aborted
    #[error("worker failed on chunk {chunk_index}: {reason}")]
    WorkerFailure {
        /// Index of the chunk whose worker failed
        chunk_index: usize,
        /// Underlying failure description
        reason: String,
    },
}

impl CoreError {
    /// Shorthand for an `InvalidConfig` error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        CoreError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, CoreError>;
