//! Text sources.
//!
//! Each source yields the whole source text in one asynchronous fetch:
//!
//! - [`FileSource`] - a file on the local filesystem
//! - [`HttpSource`] - an `http` or `https` URL
//! - [`StaticSource`] - text held in memory, for tests and embedding
//!
//! [`Location::parse`] decides between file and URL, and
//! [`Source::from_location`] builds the matching source.

mod file;
mod http;
mod location;
mod memory;

use std::future::Future;

pub use file::FileSource;
pub use http::HttpSource;
pub use location::Location;
pub use memory::StaticSource;

use crate::error::Result;

/// A place the source text can be fetched from.
pub trait TextSource: Send + Sync {
    /// Human-readable description, used in log events.
    fn describe(&self) -> String;

    /// Fetches the complete text.
    fn fetch(&self) -> impl Future<Output = Result<String>> + Send;
}

/// A file or HTTP source chosen at runtime from a [`Location`].
#[derive(Debug, Clone)]
pub enum Source {
    File(FileSource),
    Http(HttpSource),
}

impl Source {
    /// Builds the source for a location.
    pub fn from_location(location: &Location) -> Self {
        match location {
            Location::File(path) => Source::File(FileSource::new(path.clone())),
            Location::Url(url) => Source::Http(HttpSource::new(url.clone())),
        }
    }

    /// Parses `raw` with [`Location::parse`] and builds the source.
    pub fn parse(raw: &str) -> Result<Self> {
        Location::parse(raw).map(|location| Self::from_location(&location))
    }
}

impl TextSource for Source {
    fn describe(&self) -> String {
        match self {
            Source::File(source) => source.describe(),
            Source::Http(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<String> {
        match self {
            Source::File(source) => source.fetch().await,
            Source::Http(source) => source.fetch().await,
        }
    }
}
