//! Error types for loading database settings.

use thiserror::Error;

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or emitting database settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML document is malformed or has the wrong shape.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Neither a MySQL nor an SQLite section is present.
    #[error("no database backend configured (expected MySQL or SQLite)")]
    NoBackend,
}
