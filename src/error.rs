use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for b0x operations
pub type Result<T> = std::result::Result<T, B0xError>;

/// Unified error type for all b0x operations
///
/// Every variant is fatal: the run that produced it stops at the first error
/// and reports it unchanged.
#[derive(Debug, Error)]
pub enum B0xError {
    // Discovery errors
    #[error("Walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Compression errors
    #[error("Compression failed: {0}")]
    Compression(String),

    #[error("Decompression failed: {0}")]
    Decompression(String),

    // Encoding errors
    #[error("Invalid byte literal: {0}")]
    InvalidLiteral(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<toml::de::Error> for B0xError {
    fn from(err: toml::de::Error) -> Self {
        B0xError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for B0xError {
    fn from(err: serde_json::Error) -> Self {
        B0xError::Config(err.to_string())
    }
}
