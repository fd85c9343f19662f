use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::ClientError;

/// One document returned by the content service.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ContentResult {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches the page at `url` along with a generated summary.
    async fn get_contents(&self, url: &str) -> Result<Vec<ContentResult>, ClientError>;
}

#[derive(Serialize)]
struct ContentsRequest<'a> {
    urls: [&'a str; 1],
    summary: bool,
}

#[derive(Deserialize)]
struct ContentsResponse {
    #[serde(default)]
    results: Vec<ContentResult>,
}

/// Client for Exa's `/contents` endpoint.
pub struct ExaClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ExaClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_url: String = base_url.into();
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ContentSource for ExaClient {
    async fn get_contents(&self, url: &str) -> Result<Vec<ContentResult>, ClientError> {
        debug!(url, "Exa contents request");

        let res = self
            .client
            .post(format!("{}/contents", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&ContentsRequest {
                urls: [url],
                summary: true,
            })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status.as_u16(), text));
        }

        let parsed: ContentsResponse = res
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Invalid response format from Exa: {}", e)))?;

        Ok(parsed.results)
    }
}
