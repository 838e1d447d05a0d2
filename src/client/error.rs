//! Error types for the business-search client.

use thiserror::Error;

/// Errors that can occur while talking to the upstream API.
///
/// The swallowing entry points (`search`, `details`) collapse all of these
/// into an empty/absent result; `try_search`/`try_details` surface them.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    Setup {
        #[source]
        source: reqwest::Error,
    },

    /// Configured base URL cannot be used to build endpoints
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// No bearer credential available
    #[error("API key not configured: {reason}")]
    MissingCredential { reason: String },

    /// Detail lookup requested with an empty identifier
    #[error("Business id must not be empty")]
    InvalidId,

    /// Connection or send failure
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Upstream answered with a non-2xx status
    #[error("Upstream error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Stable error type string for diagnostics.
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Setup { .. } => "setup_error",
            ClientError::InvalidBaseUrl { .. } => "invalid_base_url",
            ClientError::MissingCredential { .. } => "missing_credential",
            ClientError::InvalidId => "invalid_id",
            ClientError::Transport { .. } => "transport_error",
            ClientError::Timeout { .. } => "timeout",
            ClientError::Status { .. } => "upstream_status",
            ClientError::Decode { .. } => "decode_error",
        }
    }

    /// True for failures caused by the network or the upstream service
    /// rather than local configuration.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ClientError::Transport { .. }
                | ClientError::Timeout { .. }
                | ClientError::Status { .. }
                | ClientError::Decode { .. }
        )
    }
}

/// Pull a human-readable message out of an upstream error body.
///
/// Upstream errors look like `{"error": {"code": "...", "description": "..."}}`.
/// Falls back to the raw body (truncated) when that shape is absent.
pub(crate) fn upstream_message(body: &[u8]) -> String {
    let parsed = serde_json::from_slice::<serde_json::Value>(body).ok();
    let described = parsed.as_ref().and_then(|v| {
        let error = v.get("error")?;
        error
            .get("description")
            .or_else(|| error.get("code"))
            .and_then(|d| d.as_str())
            .map(str::to_string)
    });

    described.unwrap_or_else(|| {
        let text = String::from_utf8_lossy(body);
        text.chars().take(200).collect()
    })
}
