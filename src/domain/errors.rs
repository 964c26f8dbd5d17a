//! Domain error types
//!
//! This module defines the error taxonomy for the fetch-transform-export
//! pipeline. All errors are domain-specific and don't expose third-party
//! types to callers.

use thiserror::Error;

/// Main Siphon error type
///
/// This is the primary error type used throughout the application.
/// Each variant carries a human-readable description of the failure.
#[derive(Debug, Error)]
pub enum SiphonError {
    /// Configuration-related errors (startup time only)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Upstream unreachable, transport failure, or non-success status
    #[error("Network error: {0}")]
    Network(String),

    /// Payload not valid JSON or not the expected array-of-objects shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Filesystem errors during CSV output
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for SiphonError {
    fn from(err: std::io::Error) -> Self {
        SiphonError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SiphonError {
    fn from(err: serde_json::Error) -> Self {
        SiphonError::Decode(err.to_string())
    }
}

// Conversion from csv writer/reader errors
impl From<csv::Error> for SiphonError {
    fn from(err: csv::Error) -> Self {
        SiphonError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SiphonError {
    fn from(err: toml::de::Error) -> Self {
        SiphonError::Configuration(format!("TOML parse error: {err}"))
    }
}
