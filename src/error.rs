//! Error types for the elasticpress-synonyms library.
//!
//! The mapping transform itself never fails: malformed input degrades to an
//! unchanged mapping. Errors only surface at the edges, when wordlists,
//! mappings or configuration are read from disk or parsed.
//!
//! # Examples
//!
//! ```
//! use elasticpress_synonyms::error::{Result, SynonymsError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynonymsError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for elasticpress-synonyms operations.
#[derive(Error, Debug)]
pub enum SynonymsError {
    /// I/O errors (reading wordlists, mappings, configuration)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Builder configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wordlist store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Field-group schema violations
    #[error("Schema error: {0}")]
    Schema(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with SynonymsError.
pub type Result<T> = std::result::Result<T, SynonymsError>;

impl SynonymsError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SynonymsError::Config(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        SynonymsError::Store(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        SynonymsError::Schema(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SynonymsError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SynonymsError::config("Empty filter prefix");
        assert_eq!(error.to_string(), "Configuration error: Empty filter prefix");

        let error = SynonymsError::schema("Missing word");
        assert_eq!(error.to_string(), "Schema error: Missing word");

        let error = SynonymsError::store("Unknown scope");
        assert_eq!(error.to_string(), "Store error: Unknown scope");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SynonymsError::from(io_error);

        match error {
            SynonymsError::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: SynonymsError = json_error.into();
        assert!(matches!(error, SynonymsError::Json(_)));
        assert!(error.to_string().starts_with("JSON error:"));
    }
}
