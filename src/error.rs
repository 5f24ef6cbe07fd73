//! Error types for the textsift library.

use std::io;
use thiserror::Error;

/// Result type alias for textsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during text analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A page count below 1 was supplied.
    #[error("Invalid page count: {0} (must be at least 1)")]
    InvalidPageCount(u32),

    /// An empty search term was supplied.
    #[error("Search term must not be empty")]
    EmptySearchTerm,

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Error surfaced by the external PDF decoder. Propagated unchanged;
    /// the library never attempts to recover from it.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A named operation was invoked without a required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// No operation is registered under the requested name.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPageCount(0);
        assert_eq!(err.to_string(), "Invalid page count: 0 (must be at least 1)");

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (document has 5 pages)"
        );

        let err = Error::EmptySearchTerm;
        assert_eq!(err.to_string(), "Search term must not be empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_decode_error_message() {
        let err = Error::Decode("truncated xref table".into());
        assert_eq!(err.to_string(), "Decode error: truncated xref table");
    }
}
