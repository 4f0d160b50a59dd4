//! Error types for tomlkv-cli

use tomlkv_core::ExitCode;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from tomlkv-core
    #[error(transparent)]
    Core(#[from] tomlkv_core::Error),

    /// Instance JSON could not be parsed
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the instance from stdin failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },

    /// Failure that no input can cause, e.g. rendering the result
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Core(e) => e.exit_code(),
            Self::Json(_) => ExitCode::InvalidJson,
            Self::Io(_) => ExitCode::IoError,
            Self::User { .. } => ExitCode::InvalidParameter,
            Self::Internal { .. } => ExitCode::GenericError,
        }
    }
}
