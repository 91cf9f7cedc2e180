//! HTTP source.

use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

use super::TextSource;
use crate::error::{Result, SourceError};

/// Fetches the source text with a single `GET`.
///
/// Redirects are followed with reqwest's default policy. Any status outside
/// `2xx` is a [`SourceError::Fetch`] whose message names the status code
/// and reason phrase.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Uses a preconfigured client, e.g. one with timeouts or proxies.
    pub fn with_client(url: Url, client: reqwest::Client) -> Self {
        Self { url, client }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Message for a non-success response.
pub(crate) fn status_message(status: StatusCode) -> String {
    format!(
        "Failed to fetch CSV: {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
    .trim_end()
    .to_string()
}

impl TextSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| SourceError::fetch(format!("Failed to fetch CSV: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "source responded with error status");
            return Err(SourceError::fetch(status_message(status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| SourceError::fetch(format!("Failed to fetch CSV: {e}")))?;
        debug!(url = %self.url, bytes = text.len(), "downloaded source");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_has_code_and_reason() {
        assert_eq!(
            status_message(StatusCode::NOT_FOUND),
            "Failed to fetch CSV: 404 Not Found"
        );
        assert_eq!(
            status_message(StatusCode::INTERNAL_SERVER_ERROR),
            "Failed to fetch CSV: 500 Internal Server Error"
        );
    }

    #[test]
    fn unknown_status_has_no_reason() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_message(status), "Failed to fetch CSV: 599");
    }

    #[tokio::test]
    async fn unreachable_host_is_fetch_error() {
        // Port 9 on localhost is the discard service and is closed almost everywhere.
        let url = Url::parse("http://127.0.0.1:9/report.csv").unwrap();
        let err = HttpSource::new(url).fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Fetch(ref msg) if msg.starts_with("Failed to fetch CSV: ")));
    }
}
