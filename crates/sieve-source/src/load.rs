//! One-shot loading and the load-state machine.
//!
//! ```text
//! Loading ──settle(Ok)──▶ Ready(dataset)
//!    │
//!    └────settle(Err)──▶ Error(message)
//! ```
//!
//! `Ready` and `Error` are terminal. Loading again means starting a new
//! [`LoadState`], not retrying the old one.

use sieve_seeker::{Dataset, TabularParser};
use tracing::{info, warn};

use crate::config::SourceConfig;
use crate::error::Result;
use crate::sources::TextSource;

/// Fetches the source text and parses it into a dataset.
pub async fn load<S: TextSource>(source: &S, parser: &TabularParser) -> Result<Dataset> {
    let origin = source.describe();
    info!(source = %origin, "loading dataset");

    let outcome = fetch_and_parse(source, parser).await;

    match &outcome {
        Ok(dataset) => info!(
            source = %origin,
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "dataset ready"
        ),
        Err(err) => warn!(source = %origin, error = %err, "dataset failed to load"),
    }
    outcome
}

async fn fetch_and_parse<S: TextSource>(source: &S, parser: &TabularParser) -> Result<Dataset> {
    let text = source.fetch().await?;
    Ok(parser.parse(&text)?)
}

/// Loads the dataset described by a configuration.
pub async fn load_config(config: &SourceConfig) -> Result<Dataset> {
    config.validate()?;
    let source = config.source()?;
    let parser = config.parser()?;
    load(&source, &parser).await
}

/// Progress of the single dataset load.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    /// Fetch or parse failed; holds the message to display verbatim.
    Error(String),
    Ready(Dataset),
}

impl LoadState {
    pub fn new() -> Self {
        LoadState::Loading
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    /// The dataset, once ready.
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadState::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }

    /// The failure message, if loading failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Records the outcome of the load.
    ///
    /// Only a `Loading` state changes; returns `false` and leaves the state
    /// alone if it has already settled.
    pub fn settle(&mut self, outcome: Result<Dataset>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(dataset) => LoadState::Ready(dataset),
            Err(err) => LoadState::Error(err.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::sources::StaticSource;

    const CSV: &str = "creative_id,impressions\n1,100\n2,0\n";

    #[tokio::test]
    async fn load_parses_fetched_text() {
        let dataset = load(&StaticSource::text(CSV), &TabularParser::default())
            .await
            .unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns(), ["creative_id", "impressions"]);
    }

    #[tokio::test]
    async fn load_reports_fetch_failure() {
        let err = load(
            &StaticSource::failing("Failed to fetch CSV: 404 Not Found"),
            &TabularParser::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err, SourceError::Fetch("Failed to fetch CSV: 404 Not Found".into()));
    }

    #[tokio::test]
    async fn load_reports_empty_payload() {
        let err = load(&StaticSource::text(" \n\n "), &TabularParser::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn starts_loading() {
        let state = LoadState::new();
        assert!(state.is_loading());
        assert_eq!(state.dataset(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn settle_ready_is_terminal() {
        let mut state = LoadState::new();
        assert!(state.settle(Ok(Dataset::default())));
        assert!(state.is_ready());

        assert!(!state.settle(Err(SourceError::fetch("late failure"))));
        assert!(state.is_ready());
    }

    #[test]
    fn settle_error_keeps_message() {
        let mut state = LoadState::new();
        assert!(state.settle(Err(SourceError::fetch("Failed to fetch CSV: 500 Internal Server Error"))));
        assert_eq!(state.error(), Some("Failed to fetch CSV: 500 Internal Server Error"));

        assert!(!state.settle(Ok(Dataset::default())));
        assert!(state.is_error());
    }
}
