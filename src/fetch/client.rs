use std::path::Path;
use std::time::Duration;

use reqwest::{Client, Url};

use super::{FeedFetcher, FeedSource, FetchError};
use crate::config::{FeedConfig, TransportConfig};
use crate::model::{Look, LooksPayload};

/// Fetches the looks document from the configured locator.
///
/// Remote locators go through a shared `reqwest` client; bundled ones are
/// read from disk. The locator is resolved on every call, so a malformed
/// one surfaces as a failed fetch rather than a construction error.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    locator: String,
    client: Client,
}

impl SourceFetcher {
    pub fn new(locator: impl Into<String>, transport: &TransportConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(transport.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(transport.connect_timeout_seconds)))
            .build()
            .map_err(|e| FetchError::unknown(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            locator: locator.into(),
            client,
        })
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self, FetchError> {
        Self::new(config.source.location.clone(), &config.transport)
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    async fn fetch_remote(&self, url: Url) -> Result<Vec<Look>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let body = response.bytes().await?;
        decode_looks(&body)
    }

    async fn fetch_bundled(&self, path: &Path) -> Result<Vec<Look>, FetchError> {
        let body = tokio::fs::read(path)
            .await
            .map_err(|e| FetchError::Transport {
                status: None,
                message: format!("failed to read '{}': {}", path.display(), e),
            })?;
        decode_looks(&body)
    }
}

impl FeedFetcher for SourceFetcher {
    async fn fetch(&self) -> Result<Vec<Look>, FetchError> {
        let source = FeedSource::parse(&self.locator)?;
        tracing::debug!(source = %source, "Requesting looks");

        match source {
            FeedSource::Remote(url) => self.fetch_remote(url).await,
            FeedSource::Bundled(path) => self.fetch_bundled(&path).await,
        }
    }
}

fn decode_looks(body: &[u8]) -> Result<Vec<Look>, FetchError> {
    let payload: LooksPayload = serde_json::from_slice(body)?;
    Ok(payload.looks)
}
