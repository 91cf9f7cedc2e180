//! Loading tabular source text for sieve.
//!
//! `sieve-source` fetches the source text once, from a file or an HTTP URL,
//! and parses it into a [`Dataset`](sieve_seeker::Dataset) with the seeker
//! parser. Callers track progress with [`LoadState`].
//!
//! # Quick Start
//!
//! ```no_run
//! use sieve_source::{load_config, SourceConfig};
//!
//! # async fn run() -> sieve_source::Result<()> {
//! let config = SourceConfig::new("data/segwise-report.csv");
//! let dataset = load_config(&config).await?;
//! println!("{} rows", dataset.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Testing
//!
//! [`StaticSource`] serves fixed text or a fixed failure without I/O:
//!
//! ```
//! use sieve_seeker::TabularParser;
//! use sieve_source::{load, StaticSource};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let dataset = load(&StaticSource::text("id,impressions\n1,10"), &TabularParser::default())
//!     .await
//!     .unwrap();
//! assert_eq!(dataset.len(), 1);
//! # });
//! ```

mod config;
mod error;
mod load;
pub mod sources;

pub use config::SourceConfig;
pub use error::{Result, SourceError};
pub use load::{load, load_config, LoadState};
pub use sources::{FileSource, HttpSource, Location, Source, StaticSource, TextSource};
