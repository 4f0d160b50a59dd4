//! Error types for tomlkv-core

use std::path::PathBuf;

/// Result type for tomlkv-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or mutating a TOML document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Set targets a file that does not exist
    #[error("TOML file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Document text is not valid TOML
    #[error("Failed to parse TOML at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A non-final key segment names an existing value that is not a table
    #[error("Key '{segment}' in '{key}' exists but is not a table")]
    TypeMismatch { key: String, segment: String },

    /// Input that cannot be expressed as a TOML value or instance
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Instance is missing a required property or has an unusable one
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Exit code reported to the host process for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::FileNotFound,
            Self::Parse { .. } => ExitCode::InvalidToml,
            Self::TypeMismatch { .. } | Self::InvalidArgument { .. } => ExitCode::InvalidArgument,
            Self::InvalidParameter { .. } => ExitCode::InvalidParameter,
            Self::Io { .. } => ExitCode::IoError,
        }
    }
}

/// Process exit codes understood by the resource host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    InvalidParameter = 1,
    GenericError = 2,
    InvalidJson = 3,
    FileNotFound = 4,
    InvalidToml = 5,
    InvalidArgument = 6,
    IoError = 7,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InvalidParameter => "Invalid parameter",
            Self::GenericError => "Generic error",
            Self::InvalidJson => "Invalid JSON",
            Self::FileNotFound => "TOML file not found",
            Self::InvalidToml => "Invalid TOML format",
            Self::InvalidArgument => "Invalid argument",
            Self::IoError => "IO error",
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}
