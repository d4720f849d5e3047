//! Error types for the Rota library.
//!
//! All fallible operations return [`Result`], an alias over [`RotaError`].
//!
//! # Examples
//!
//! ```
//! use rota::error::{Result, RotaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RotaError::corpus("malformed training line"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Rota operations.
#[derive(Error, Debug)]
pub enum RotaError {
    /// I/O errors (reading training/test files, writing reports).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Training/test corpus errors.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Evaluation errors.
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`RotaError`].
pub type Result<T> = std::result::Result<T, RotaError>;

impl RotaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RotaError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        RotaError::Corpus(msg.into())
    }

    /// Create a new evaluation error.
    pub fn evaluation<S: Into<String>>(msg: S) -> Self {
        RotaError::Evaluation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RotaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RotaError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RotaError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = RotaError::corpus("Test corpus error");
        assert_eq!(error.to_string(), "Corpus error: Test corpus error");

        let error = RotaError::evaluation("Test evaluation error");
        assert_eq!(error.to_string(), "Evaluation error: Test evaluation error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let rota_error = RotaError::from(io_error);

        match rota_error {
            RotaError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
