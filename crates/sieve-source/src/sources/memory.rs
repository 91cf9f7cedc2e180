//! In-memory source.

use super::TextSource;
use crate::error::{Result, SourceError};

/// Serves fixed text, or a fixed failure, without any I/O.
///
/// # Example
///
/// ```
/// use sieve_source::StaticSource;
///
/// let ok = StaticSource::text("a,b\n1,2");
/// let down = StaticSource::failing("Failed to fetch CSV: 503 Service Unavailable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    outcome: Result<String>,
}

impl StaticSource {
    /// A source that yields `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
        }
    }

    /// A source whose fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(SourceError::fetch(message)),
        }
    }
}

impl TextSource for StaticSource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    async fn fetch(&self) -> Result<String> {
        self.outcome.clone()
    }
}
