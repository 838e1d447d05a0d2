mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{CredentialStatus, SecureString, API_KEY_ENV_VAR};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, Defaults, MAX_LIMIT};
