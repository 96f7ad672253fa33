//! CLI error types and exit codes.

use gpgfind_core::FinderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// No acceptable executable; the message is already user-facing.
    #[error(transparent)]
    Resolution(#[from] FinderError),

    /// Writing the result failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the JSON result failed.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Map error to exit code.
    ///
    /// - 1: nothing suitable installed
    /// - 70: internal software error (`EX_SOFTWARE`)
    /// - 74: output error (`EX_IOERR`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Resolution(_) => 1,
            Self::Encode(_) => 70,
            Self::Io(_) => 74,
        }
    }
}
