//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can stop a run, offering more context than generic I/O or `anyhow` errors.
//! Per-file problems (oversize files, unreadable content) are not surfaced
//! through this type during a run; they are recorded in the run's error log.

use std::time::Duration;
use thiserror::Error;

/// A specialized `Result` type for `dirprint` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors used throughout `dirprint`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Configuration Errors ---
    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    // --- State Errors ---
    /// The processed-files record could not be encoded or decoded.
    #[error("State file error: {0}")]
    State(String),

    /// A file read completed but took longer than the configured soft budget.
    #[error(
        "File read took longer than {} seconds ({:.2}s)",
        limit.as_secs(),
        elapsed.as_secs_f64()
    )]
    ReadTimeout {
        /// How long the read actually took.
        elapsed: Duration,
        /// The configured budget.
        limit: Duration,
    },

    // --- Run Control ---
    /// The operation was interrupted by a signal (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,

    /// The user declined the confirmation prompt.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// No files matched the discovery rules.
    #[error("No files found in specified directories!")]
    NoFilesFound,

    /// Wraps errors raised by helpers that report through `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.ts");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = io_error_with_path(source_error, &path);

        match err {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.ts"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }

        let err = io_error_with_path(
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
            "another/path",
        );
        let message = err.to_string();
        assert!(message.contains("another/path"));
        assert!(message.contains("Access denied"));
    }

    #[test]
    fn test_read_timeout_message() {
        let err = Error::ReadTimeout {
            elapsed: Duration::from_millis(12_500),
            limit: Duration::from_secs(10),
        };
        assert_eq!(
            err.to_string(),
            "File read took longer than 10 seconds (12.50s)"
        );
    }
}
