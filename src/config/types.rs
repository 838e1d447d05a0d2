use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Default search parameters and transport timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Search keyword sent on screen mount (default: "restaurants").
    #[serde(default = "default_term")]
    pub term: String,
    /// Search location sent on screen mount (default: "New York").
    #[serde(default = "default_location")]
    pub location: String,
    /// Result-count cap for a search page (default: 50).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Upstream business-search API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "https://api.yelp.com/v3").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer credential. `YELP_API_KEY` takes precedence when set.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Largest page size the upstream accepts.
pub const MAX_LIMIT: u32 = 50;

fn default_term() -> String {
    "restaurants".to_string()
}

fn default_location() -> String {
    "New York".to_string()
}

fn default_limit() -> u32 {
    MAX_LIMIT
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_base_url() -> String {
    "https://api.yelp.com/v3".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            term: default_term(),
            location: default_location(),
            limit: default_limit(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
        }
    }
}
