//! Source location parsing.

use std::fmt;
use std::path::PathBuf;

use reqwest::Url;

use crate::error::{Result, SourceError};

/// Where the source text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A path on the local filesystem.
    File(PathBuf),
    /// An `http` or `https` URL.
    Url(Url),
}

impl Location {
    /// Parses a location string.
    ///
    /// Strings starting with `http://` or `https://` must be valid URLs.
    /// A `file://` prefix is stripped. Anything else is taken as a path.
    /// Blank input is rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use sieve_source::Location;
    ///
    /// assert!(matches!(Location::parse("data/report.csv"), Ok(Location::File(_))));
    /// assert!(matches!(Location::parse("https://example.com/r.csv"), Ok(Location::Url(_))));
    /// assert!(Location::parse("  ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SourceError::InvalidLocation(raw.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Url::parse(trimmed)
                .map(Location::Url)
                .map_err(|_| SourceError::InvalidLocation(raw.to_string()));
        }

        let path = trimmed.strip_prefix("file://").unwrap_or(trimmed);
        if path.is_empty() {
            return Err(SourceError::InvalidLocation(raw.to_string()));
        }
        Ok(Location::File(PathBuf::from(path)))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File(path) => write!(f, "{}", path.display()),
            Location::Url(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_files() {
        assert_eq!(
            Location::parse("data/segwise-report.csv").unwrap(),
            Location::File(PathBuf::from("data/segwise-report.csv"))
        );
        assert_eq!(
            Location::parse(" /tmp/r.csv ").unwrap(),
            Location::File(PathBuf::from("/tmp/r.csv"))
        );
    }

    #[test]
    fn file_scheme_is_stripped() {
        assert_eq!(
            Location::parse("file:///tmp/r.csv").unwrap(),
            Location::File(PathBuf::from("/tmp/r.csv"))
        );
        assert!(Location::parse("file://").is_err());
    }

    #[test]
    fn urls_are_parsed() {
        let location = Location::parse("HTTPS://example.com/data/r.csv").unwrap();
        match location {
            Location::Url(url) => {
                assert_eq!(url.scheme(), "https");
                assert_eq!(url.path(), "/data/r.csv");
            }
            other => panic!("expected url, got {other:?}"),
        }
    }

    #[test]
    fn bad_urls_are_rejected() {
        assert_eq!(
            Location::parse("http://").unwrap_err(),
            SourceError::InvalidLocation("http://".into())
        );
    }

    #[test]
    fn blank_is_rejected() {
        assert!(matches!(
            Location::parse(""),
            Err(SourceError::InvalidLocation(_))
        ));
    }

    #[test]
    fn display_round_trips_text() {
        assert_eq!(Location::parse("a/b.csv").unwrap().to_string(), "a/b.csv");
        assert_eq!(
            Location::parse("https://example.com/r.csv").unwrap().to_string(),
            "https://example.com/r.csv"
        );
    }
}
