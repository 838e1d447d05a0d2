//! HTTP client for the upstream business-search API.
//!
//! Two surfaces are offered:
//!
//! - `try_search` / `try_details` return a [`ClientError`] on failure so a
//!   caller can tell "no matches" apart from "fetch failed".
//! - `search` / `details` log the failure and return an empty list / `None`.
//!
//! No retries, no caching.

mod error;
mod timeout;

pub use error::ClientError;
pub use timeout::TimeoutConfig;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::time::timeout;

use crate::business::Business;
use crate::config::{build_auth_header, ApiConfig, Config, API_KEY_ENV_VAR};

/// Anything that can run the screen's one search request.
#[async_trait]
pub trait BusinessSource: Send + Sync {
    async fn try_search(&self, term: &str, location: &str) -> Result<Vec<Business>, ClientError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    businesses: Vec<Business>,
}

pub struct BusinessClient {
    client: Client,
    api: ApiConfig,
    base_url: Url,
    limit: u32,
    timeouts: TimeoutConfig,
}

impl BusinessClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let timeouts = TimeoutConfig::from(&config.defaults);
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| ClientError::Setup { source: e })?;

        let base_url = Url::parse(&config.api.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.api.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: config.api.base_url.clone(),
                reason: "URL cannot have path segments".to_string(),
            });
        }

        Ok(Self {
            client,
            api: config.api.clone(),
            base_url,
            limit: config.defaults.limit,
            timeouts,
        })
    }

    /// Keyword + location search, capped at the configured page size.
    pub async fn try_search(
        &self,
        term: &str,
        location: &str,
    ) -> Result<Vec<Business>, ClientError> {
        let mut url = self.endpoint(&["businesses", "search"])?;
        url.query_pairs_mut()
            .append_pair("term", term)
            .append_pair("location", location)
            .append_pair("limit", &self.limit.to_string());

        let page: SearchResponse = self.get_json(url).await?;
        tracing::debug!(count = page.businesses.len(), term, location, "Fetched businesses");
        Ok(page.businesses)
    }

    /// Search that never fails: errors are logged and yield an empty list.
    pub async fn search(&self, term: &str, location: &str) -> Vec<Business> {
        match self.try_search(term, location).await {
            Ok(businesses) => businesses,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.error_type(),
                    term,
                    location,
                    "Error fetching businesses"
                );
                Vec::new()
            }
        }
    }

    /// Fetch a single business by identifier.
    pub async fn try_details(&self, id: &str) -> Result<Business, ClientError> {
        if id.is_empty() {
            return Err(ClientError::InvalidId);
        }
        // `id` is pushed as one segment, so reserved characters get escaped.
        let url = self.endpoint(&["businesses", id])?;
        self.get_json(url).await
    }

    /// Detail lookup that never fails: errors are logged and yield `None`.
    pub async fn details(&self, id: &str) -> Option<Business> {
        match self.try_details(id).await {
            Ok(business) => Some(business),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.error_type(),
                    id,
                    "Error fetching business details"
                );
                None
            }
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot have path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let result = timeout(self.timeouts.request, self.do_get(url)).await;

        match result {
            Ok(response) => response,
            Err(_) => Err(ClientError::Timeout {
                duration: self.timeouts.request.as_secs(),
            }),
        }
    }

    async fn do_get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let (name, value) =
            build_auth_header(&self.api).ok_or_else(|| ClientError::MissingCredential {
                reason: format!("set api.api_key or {}", API_KEY_ENV_VAR),
            })?;

        let endpoint = url.path().to_string();
        tracing::debug!(%url, "GET upstream");

        let response = self
            .client
            .get(url)
            .header(name.as_str(), value)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ClientError::Transport {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: error::upstream_message(&body),
            });
        }

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
            endpoint,
            source: e,
        })
    }
}

#[async_trait]
impl BusinessSource for BusinessClient {
    async fn try_search(&self, term: &str, location: &str) -> Result<Vec<Business>, ClientError> {
        BusinessClient::try_search(self, term, location).await
    }
}
