/// Structured error types for promptdeck-core.
///
/// The page model itself is total; only loading configuration and
/// delivering submissions can fail. The `promptdeck` binary wraps these in
/// `anyhow` for context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for promptdeck-core operations
#[derive(Error, Debug)]
pub enum PromptDeckError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration file is not valid TOML (or has the wrong shape)
    #[error("Invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration could not be serialized back to TOML
    #[error("Failed to serialize config: {source}")]
    ConfigSerialize {
        #[from]
        source: toml::ser::Error,
    },

    /// JSON serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Two favorites share an identifier
    #[error("Duplicate favorite id '{id}'")]
    DuplicateFavorite { id: String },

    /// A favorites source produced nothing to show
    #[error("Favorites list is empty")]
    NoFavorites,

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for promptdeck-core operations
pub type Result<T> = std::result::Result<T, PromptDeckError>;

impl PromptDeckError {
    /// Create a config parse error for a file
    pub fn config_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a duplicate favorite error
    pub fn duplicate_favorite(id: impl Into<String>) -> Self {
        Self::DuplicateFavorite { id: id.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PromptDeckError::duplicate_favorite("2");
        assert_eq!(err.to_string(), "Duplicate favorite id '2'");

        let err = PromptDeckError::config("submit.path is required for the jsonl sink");
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("submit.path"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: PromptDeckError = io_err.into();

        assert!(matches!(err, PromptDeckError::Io { .. }));
    }
}
