//! Credential resolution from configuration.
//!
//! The bearer key comes from the `YELP_API_KEY` environment variable when
//! it is set and non-empty, otherwise from `api.api_key` in the config.

use super::types::ApiConfig;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV_VAR: &str = "YELP_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl ApiConfig {
    /// Resolve the API key, preferring the environment.
    ///
    /// Called on demand and not cached.
    pub fn resolve_credential(&self) -> CredentialStatus {
        let from_env = std::env::var(API_KEY_ENV_VAR).ok();
        self.resolve_credential_with(from_env.as_deref())
    }

    fn resolve_credential_with(&self, env_value: Option<&str>) -> CredentialStatus {
        let key = env_value
            .filter(|v| !v.is_empty())
            .or_else(|| self.api_key.as_deref().filter(|v| !v.is_empty()));

        match key {
            Some(key) => CredentialStatus::Configured(SecureString::new(key.to_string())),
            None => CredentialStatus::Unconfigured {
                reason: format!("api.api_key is not set and {} is empty", API_KEY_ENV_VAR),
            },
        }
    }
}
