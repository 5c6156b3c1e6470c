//! Error types for backup ingestion and querying.
//!
//! Ingestion fails fast: the first malformed record aborts the whole file, so callers never see
//! a partially built index. Query-time errors ([`NbuError::InvalidPattern`],
//! [`NbuError::InvalidBucketFormat`]) come from caller-supplied input and leave the index intact.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NbuError {
    #[error("Failed to decode backup file {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Malformed record #{record}: {reason}")]
    MalformedRecord { record: usize, reason: String },

    #[error(
        "Unbalanced marker in record #{record}: expected END:{}, found {found}",
        .expected.as_deref().unwrap_or("<none>")
    )]
    UnbalancedMarker { record: usize, expected: Option<String>, found: String },

    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid bucket format '{format}'")]
    InvalidBucketFormat { format: String },
}

impl NbuError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        // Record numbers are filled in by the index builder, which knows the position.
        NbuError::MalformedRecord { record: 0, reason: reason.into() }
    }

    pub(crate) fn unbalanced(expected: Option<&str>, found: impl Into<String>) -> Self {
        NbuError::UnbalancedMarker {
            record: 0,
            expected: expected.map(str::to_string),
            found: found.into(),
        }
    }

    /// Attach the 1-based record position to record-level errors.
    pub(crate) fn at_record(self, position: usize) -> Self {
        match self {
            NbuError::MalformedRecord { reason, .. } => {
                NbuError::MalformedRecord { record: position, reason }
            }
            NbuError::UnbalancedMarker { expected, found, .. } => {
                NbuError::UnbalancedMarker { record: position, expected, found }
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, NbuError>;
