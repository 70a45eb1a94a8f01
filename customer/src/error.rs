//! Customer module error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomerError {
    #[error("Persistence unavailable: {operation} on '{key}': {reason}")]
    PersistenceUnavailable {
        operation: String,
        key: String,
        reason: String,
    },

    #[error("Stored snapshot under '{key}' is corrupt: {reason}")]
    SnapshotCorrupt { key: String, reason: String },

    #[error("Invalid format rule: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CustomerError {
    pub fn persistence(
        operation: impl Into<String>,
        key: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::PersistenceUnavailable {
            operation: operation.into(),
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// True for failures that abort a mutation without touching state
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::PersistenceUnavailable { .. })
    }
}

pub type CustomerResult<T> = Result<T, CustomerError>;
