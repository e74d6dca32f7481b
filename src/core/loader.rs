use crate::utils::error::{Result, SiteError};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Fetches one JSON document per call. Every request bypasses intermediary
/// caches so a republished data file is picked up immediately. A non-success
/// status or an unparsable body fails the whole load; there are no retries.
#[derive(Debug, Clone, Default)]
pub struct JsonFetcher {
    client: Client,
}

impl JsonFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status for {}: {}", url, status);

        if !status.is_success() {
            return Err(SiteError::FetchError {
                path: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| SiteError::ParseError {
            path: url.to_string(),
            source,
        })
    }
}
