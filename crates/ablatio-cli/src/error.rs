//! Error types for ablatio-cli

use thiserror::Error;

/// Result type alias for ablatio-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ablatio-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the engine crates
    #[error(transparent)]
    Core(#[from] ablatio_core::Error),

    /// A blocking worker panicked or was aborted
    #[error("Worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A command-line value could not be interpreted
    #[error("Invalid value '{value}': {message}")]
    InvalidArgument {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        message: String,
    },
}

impl Error {
    /// Creates an `InvalidArgument` error.
    pub fn invalid_argument(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            value: value.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Core(err.into())
    }
}
