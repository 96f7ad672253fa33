//! Error types for executable resolution.

use thiserror::Error;

/// Error returned when a finder cannot produce an acceptable executable.
///
/// A candidate that is missing from the search path, cannot be launched or
/// reports the wrong generation all end up here: at this layer they are the
/// same outcome. The message is written as an instruction for the end user
/// and is meant to be shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    /// No candidate produced the expected version marker.
    #[error("{message}")]
    NotFound {
        /// User-facing message naming the package to install.
        message: String,
    },
}

impl FinderError {
    /// Create a `NotFound` error carrying the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message } => message,
        }
    }
}

/// Result type for finder operations.
pub type FinderResult<T> = Result<T, FinderError>;
