//! Common error types for Kovol Rust components.

use thiserror::Error;

/// Common error type for Kovol operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Root extraction error
    #[error("root error: {0}")]
    Root(#[from] kovol_core::RootError),

    /// Configuration error: a bad settings file or log filter
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using Kovol Error.
pub type Result<T> = std::result::Result<T, Error>;
