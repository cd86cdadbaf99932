//! Error types for the query crate.
//!
//! Interpreting a query and filtering patients never fails. Errors only arise
//! when a patient store is built from external seed data.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`PatientStore`](crate::PatientStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// The seed file could not be read.
    #[error("failed to read patient seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed data is not a JSON array of patient records.
    #[error("invalid patient seed data: {0}")]
    Json(#[from] serde_json::Error),

    /// A record has an empty name.
    #[error("patient record {index} has an empty name")]
    EmptyName { index: usize },

    /// A record's condition is not a canonical condition tag.
    #[error("patient record {index} ({name}) has unknown condition '{condition}'")]
    UnknownCondition {
        index: usize,
        name: String,
        condition: String,
    },
}

/// Result type alias for patient store construction.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_condition_display() {
        let err = StoreError::UnknownCondition {
            index: 3,
            name: "Ana Ruiz".to_string(),
            condition: "flu".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "patient record 3 (Ana Ruiz) has unknown condition 'flu'"
        );
    }
}
