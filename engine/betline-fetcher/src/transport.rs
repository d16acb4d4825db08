use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::FetcherConfig;
use crate::error::{FetchError, Result};

/// Fetches a URL and returns the raw body
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one GET and return the body, or the status/transport failure
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// reqwest-backed transport used by the real run
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport from the API configuration
    pub fn new(config: &FetcherConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.api.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network { url: url.to_string(), source })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(FetchError::Http { url: url.to_string(), status });
        }

        response.text().await.map_err(|source| FetchError::Network { url: url.to_string(), source })
    }
}
