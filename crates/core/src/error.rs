use std::io;
use std::path::PathBuf;

/// Errors that can occur during runlet operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to write script file {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },

    #[error("Failed to start process '{program}': {source}")]
    SpawnError { program: String, source: io::Error },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for runlet operations
pub type Result<T> = std::result::Result<T, Error>;
