//! Error types for skillgrep-core

use thiserror::Error;

/// Main error type for the skillgrep-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Embedded seed data failed to parse
    #[error("seed data error: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Result type alias for skillgrep-core
pub type Result<T> = std::result::Result<T, Error>;
