//! Error types for configuration operations.

use std::path::PathBuf;

/// Errors that can occur while reading, writing, or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading/writing configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file not found.
    #[error("configuration file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A compiler version pin could not be parsed.
    #[error("invalid compiler version pin '{input}': {reason}")]
    Version {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An EVM version identifier was not recognized.
    #[error("unknown EVM version: '{input}'")]
    UnknownEvmVersion {
        /// The rejected identifier.
        input: String,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
