//! Feed sources: HTTP endpoint and on-disk snapshot.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use super::error::FeedError;

/// Default URL of the MTA Long Island Rail Road GTFS-Realtime feed.
const DEFAULT_FEED_URL: &str =
    "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/lirr%2Fgtfs-lirr";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Supplies raw feed bytes for one search.
///
/// This abstraction allows the service to be tested without network access.
pub trait FeedSource {
    /// Fetch the latest feed snapshot.
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, FeedError>> + Send;
}

/// Configuration for the HTTP feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed URL
    pub url: String,
    /// Optional API key sent as `x-api-key`
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a config for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

/// HTTP client for a GTFS-Realtime endpoint.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|_| FeedError::Config("invalid API key format".to_string()))?;
            headers.insert("x-api-key", value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The URL this client fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedSource for FeedClient {
    async fn fetch(&self) -> Result<Vec<u8>, FeedError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!(url = %self.url, bytes = bytes.len(), "fetched feed");
        Ok(bytes.to_vec())
    }
}

/// Feed source that reads a saved protobuf snapshot from disk.
///
/// Useful for development without network access; the file is re-read on
/// every fetch so it can be replaced while the server runs.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<Vec<u8>, FeedError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
