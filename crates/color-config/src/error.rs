//! Configuration error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while validating, loading, saving or editing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not a JSON object.
    #[error("{message}")]
    BadDocument { message: String },

    /// The document names a field that does not exist.
    #[error("Bad configuration key \"{key}\"")]
    UnknownKey { key: String },

    /// A field holds a value outside its domain.
    #[error("Bad value for configuration key \"{key}\" (expecting {expecting})")]
    BadValue {
        key: &'static str,
        expecting: String,
    },

    /// File I/O error.
    #[error("Failed to {operation} {}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("Bad JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The external editor could not be run or reported failure.
    #[error("Cannot edit configuration with \"{program}\": {message}")]
    Editor { program: String, message: String },
}

impl ConfigError {
    pub(crate) fn bad_value(key: &'static str, expecting: impl Into<String>) -> Self {
        Self::BadValue {
            key,
            expecting: expecting.into(),
        }
    }

    pub(crate) fn io(
        operation: &'static str,
        path: &Path,
    ) -> impl FnOnce(std::io::Error) -> Self + use<> {
        let path = path.to_path_buf();
        move |source| Self::Io {
            operation,
            path,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
