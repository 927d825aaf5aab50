//! Store error taxonomy
//!
//! Typed so callers can tell a missing record apart from a broken file. The
//! API facade flattens these into result objects; the CLI reports them as-is.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the CSV-backed stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No record found with ID {id}")]
    NotFound { id: u64 },

    #[error("Malformed ID value {value:?} in {}", .path.display())]
    BadId { value: String, path: PathBuf },

    #[error("Unexpected header in {}: expected {expected:?}, found {found:?}", .path.display())]
    Header {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl StoreError {
    /// Whether this is the not-found case rather than a real failure
    #[allow(dead_code)]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound { id: 7 };
        assert_eq!(err.to_string(), "No record found with ID 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_is_not_not_found() {
        let err = StoreError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(!err.is_not_found());
    }
}
