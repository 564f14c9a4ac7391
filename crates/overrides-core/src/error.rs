//! Error types for overrides-core

use std::path::PathBuf;

/// Result type for overrides-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in overrides-core operations
///
/// Every variant is terminal for the current invocation. The CLI boundary
/// decides how to report it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input document is absent
    #[error("{path} not found")]
    MissingDocument { path: PathBuf },

    /// A document exists but is not valid JSON for its schema
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// `add` was called with an identifier already in the store
    #[error("Identifier '{id}' already exists in the override store")]
    DuplicateIdentifier { id: String },

    /// An explicit identifier does not name any stored override
    #[error("Invalid id. '{id}' does not exist in the override store")]
    UnknownIdentifier { id: String },

    /// Interactive selection was requested against an empty store
    #[error("No overrides available in the override store")]
    NoOverridesAvailable,

    /// An identifier failed validation before any I/O
    #[error("Invalid identifier: {reason}")]
    InvalidIdentifier { reason: String },

    /// The selection collaborator failed
    #[error("Selection prompt failed: {message}")]
    Prompt { message: String },

    /// Any other filesystem failure
    #[error(transparent)]
    Fs(overrides_fs::Error),
}

impl From<overrides_fs::Error> for Error {
    fn from(err: overrides_fs::Error) -> Self {
        match err {
            overrides_fs::Error::NotFound { path } => Self::MissingDocument { path },
            overrides_fs::Error::Parse { path, message, .. } => Self::Parse { path, message },
            other => Self::Fs(other),
        }
    }
}

impl Error {
    /// Create a prompt error from any displayable failure
    pub fn prompt(message: impl std::fmt::Display) -> Self {
        Self::Prompt {
            message: message.to_string(),
        }
    }
}
