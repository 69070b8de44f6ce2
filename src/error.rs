//! Error Types
//!
//! The input-forwarding path is deliberately infallible: unmapped
//! identifiers degrade to sentinels and narrowing casts truncate. Errors
//! exist only for the configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Bridge error types.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Configuration file could not be read
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration value out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
