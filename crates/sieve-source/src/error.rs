//! Error types for source loading.

use sieve_seeker::SeekerError;

/// Errors that can occur while locating, fetching or parsing a source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source was unreachable or answered with a non-success status.
    #[error("{0}")]
    Fetch(String),

    /// The fetched text could not be parsed into a dataset.
    #[error(transparent)]
    Parse(#[from] SeekerError),

    /// Configuration could not be read or is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The location is neither a usable path nor an http(s) URL.
    #[error("Invalid source location '{0}'")]
    InvalidLocation(String),
}

impl SourceError {
    /// Create a fetch error.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
