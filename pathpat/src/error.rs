//! Error types for the pathpat library.
//!
//! This module provides the error hierarchy for all operations in the
//! pathpat library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathpat error.
///
/// # Examples
///
/// ```
/// use pathpat::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathpat library.
///
/// Note that a batch of strings with *no* common structure is not an error:
/// decomposition falls back to a terminal string set. Errors are reserved
/// for unusable inputs and for the configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// An empty input list was provided where at least one item is required.
    #[error("no inputs provided: at least one path or string is required")]
    EmptyInput,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

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

impl Error {
    /// Check if error indicates an empty input list.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathpat::Error;
    ///
    /// assert!(Error::EmptyInput.is_empty_input());
    /// ```
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}
