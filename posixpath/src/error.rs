//! Error types for the posixpath library.
//!
//! The path functions themselves never fail. Errors only come from the
//! layers around them: module lookup, configuration, and decoding path
//! records supplied as text.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a posixpath error.
///
/// # Examples
///
/// ```
/// use posixpath::{Error, Result};
///
/// fn lookup_name() -> Result<&'static str> {
///     Ok("node:path")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the posixpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// No module is registered under the requested name.
    #[error("unknown module '{name}'")]
    UnknownModule {
        /// The name that was looked up.
        name: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path record could not be decoded.
    #[error("invalid path record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}
