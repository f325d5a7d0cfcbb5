//! Error types for rapid-recall

use thiserror::Error;

/// Result type alias for rapid-recall operations
pub type Result<T> = std::result::Result<T, RecallError>;

/// Errors raised by storage backends, configuration and the terminal reader.
///
/// The word-set store never returns these to its callers; it recovers
/// locally and logs instead.
#[derive(Error, Debug)]
pub enum RecallError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Could not serialize configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("No such word set: {0}")]
    NoSuchSet(String),

    #[error("{0}")]
    Message(String),
}
