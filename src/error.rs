//! Custom error types for cents
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for cents operations
#[derive(Error, Debug)]
pub enum CentsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Ledger file encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Rejected user input (bad amount, unknown type, empty description)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The ledger file is absent or has zero bytes
    #[error("Ledger file is missing or empty: {}", .0.display())]
    StorageMissing(PathBuf),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CentsError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the ledger file still needs to be created
    pub fn is_storage_missing(&self) -> bool {
        matches!(self, Self::StorageMissing(_))
    }

    /// Process exit code the command line reports for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::NotFound { .. } => 3,
            _ => 1,
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CentsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CentsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for CentsError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for cents operations
pub type CentsResult<T> = Result<T, CentsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CentsError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CentsError::transaction_not_found(7);
        assert_eq!(err.to_string(), "Transaction not found: 7");
        assert!(err.is_not_found());
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_storage_missing_error() {
        let err = CentsError::StorageMissing(PathBuf::from("/tmp/ledger.csv"));
        assert_eq!(
            err.to_string(),
            "Ledger file is missing or empty: /tmp/ledger.csv"
        );
        assert!(err.is_storage_missing());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_validation_exit_code() {
        let err = CentsError::Validation("bad amount".into());
        assert!(err.is_validation());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cents_err: CentsError = io_err.into();
        assert!(matches!(cents_err, CentsError::Io(_)));
    }
}
