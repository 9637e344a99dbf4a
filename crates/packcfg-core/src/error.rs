//! Configuration error types

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort configuration resolution
///
/// A missing optional input (an absent property file) is never represented
/// here: it resolves to an empty store instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Property file present but unparsable
    #[error("Malformed property file {}:{}: {}", .path.display(), .line, .message)]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Metadata value present but not convertible to the expected type
    #[error("Property '{key}' from {origin} has value '{value}', expected {expected}")]
    TypeMismatch {
        key: String,
        value: String,
        expected: &'static str,
        origin: String,
    },

    /// Required setting with no default was not supplied
    #[error("Required value '{0}' was not supplied")]
    MissingRequiredValue(String),

    /// Project descriptor present but not valid YAML for the descriptor schema
    #[error("Malformed project descriptor {}: {}", .path.display(), .message)]
    Descriptor { path: PathBuf, message: String },

    /// File exists but could not be read
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Explicit property argument without a `=`
    #[error("Invalid property override '{0}', expected key=value")]
    InvalidOverride(String),

    /// Unrecognized build variant name
    #[error("Unknown build variant '{0}', expected one of: debug, profile, release")]
    UnknownVariant(String),

    /// Output rendering failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ConfigError {
    /// Create a malformed-input error
    pub fn malformed(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an I/O error for a file that exists but could not be read
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
