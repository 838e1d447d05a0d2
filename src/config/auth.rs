//! Authentication header building for API requests.

use super::credentials::CredentialStatus;
use super::types::ApiConfig;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization: Bearer` header for the upstream API.
///
/// Returns `None` when no credential is configured.
pub fn build_auth_header(api: &ApiConfig) -> Option<AuthHeader> {
    match api.resolve_credential() {
        CredentialStatus::Configured(key) => Some((
            "Authorization".to_string(),
            format!("Bearer {}", key.expose()),
        )),
        CredentialStatus::Unconfigured { .. } => None,
    }
}
