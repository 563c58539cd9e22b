//! Unified error types for wagroup.
//!
//! This module provides a single [`WagroupError`] enum covering every fatal
//! failure in the library. Non-fatal anomalies (orphan lines before the first
//! message header, blocks that don't look like messages, malformed polls) are
//! absorbed by the parser and never surface here.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for wagroup operations.
///
/// # Example
///
/// ```rust
/// use wagroup::error::Result;
/// use wagroup::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, WagroupError>;

/// The error type for all wagroup operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WagroupError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist or can't be read
    /// - The output file can't be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The parser configuration is invalid.
    ///
    /// Raised before any transcript is read, e.g. when the group name is empty.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of what's wrong
        message: String,
    },

    /// The transcript is empty after trimming surrounding whitespace.
    #[error("Transcript is empty")]
    EmptyTranscript,

    /// The requested format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// UTF-8 encoding error while assembling rendered output.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for WagroupError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        WagroupError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl WagroupError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        WagroupError::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        WagroupError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, WagroupError::Io(_))
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, WagroupError::Config { .. })
    }

    /// Returns `true` if the transcript was empty.
    pub fn is_empty_transcript(&self) -> bool {
        matches!(self, WagroupError::EmptyTranscript)
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, WagroupError::InvalidFormat { .. })
    }
}
