//! Pure Nominatim (OpenStreetMap) REST API client.
//!
//! A minimal client for the Nominatim search endpoint. Nominatim's usage
//! policy requires an identifying User-Agent on every request and allows at
//! most one request per second; this client always sends the User-Agent and
//! leaves pacing to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use nominatim_client::NominatimClient;
//!
//! let client = NominatimClient::new("fanpulse/0.1 (ops@fanpulse.example)");
//!
//! if let Some(hit) = client.search_one("Manchester, UK").await? {
//!     println!("{} -> ({}, {})", hit.display_name, hit.latitude, hit.longitude);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{NominatimError, Result};
pub use types::SearchHit;

use std::time::Duration;

const BASE_URL: &str = "https://nominatim.openstreetmap.org";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl NominatimClient {
    /// Create a client identifying itself with the given User-Agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            user_agent: user_agent.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different server (self-hosted instance, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Free-text search, returning up to `limit` matches.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>> {
        let url = format!(
            "{}/search?q={}&format=json&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        tracing::debug!(query, limit, "Querying nominatim");

        let resp = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NominatimError::Timeout {
                        query: query.to_string(),
                    }
                } else {
                    NominatimError::Http(e)
                }
            })?;

        let status = resp.status();
        if status.as_u16() == 429 || status.is_server_error() {
            return Err(NominatimError::Unavailable {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NominatimError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await.map_err(|e| {
            if e.is_timeout() {
                NominatimError::Timeout {
                    query: query.to_string(),
                }
            } else {
                NominatimError::Http(e)
            }
        })?;

        let values: Vec<serde_json::Value> = serde_json::from_str(&body)
            .map_err(|e| NominatimError::InvalidResponse(e.to_string()))?;

        values
            .into_iter()
            .map(|v| SearchHit::from_value(v).map_err(NominatimError::InvalidResponse))
            .collect()
    }

    /// Free-text search returning the single best match, if any.
    pub async fn search_one(&self, query: &str) -> Result<Option<SearchHit>> {
        let hits = self.search(query, 1).await?;
        Ok(hits.into_iter().next())
    }
}
