//! Error types for Scrivo operations.
//!
//! The transformation pipeline itself is infallible: empty input
//! short-circuits and malformed markup degrades to paragraphs. This error type
//! covers the fallible edges around it (configuration loading, file I/O in
//! the CLI, JSON serialization of metadata).

use std::path::Path;
use thiserror::Error;

/// Errors that can occur in Scrivo operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file.
    #[error("I/O error at {path}: {source}")]
    IoPath {
        /// File that could not be read or written.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Wrap an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoPath {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Result type alias using Scrivo's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("missing section");
        assert_eq!(err.to_string(), "Configuration error: missing section");
    }

    #[test]
    fn test_invalid_data_display() {
        let err = Error::invalid_data("bad keyword list");
        assert_eq!(err.to_string(), "Invalid data: bad keyword list");
    }

    #[test]
    fn test_io_with_path_mentions_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io_with_path(io, "/tmp/post.md");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/post.md"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::other("disk full");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err: Error = serde_err.into();
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
