use std::time::Duration;

use crate::config::Defaults;

/// Connect and total-request timeouts for upstream calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub request: Duration,
}

impl From<&Defaults> for TimeoutConfig {
    fn from(defaults: &Defaults) -> Self {
        Self {
            connect: Duration::from_secs(u64::from(defaults.connect_timeout_seconds)),
            request: Duration::from_secs(u64::from(defaults.timeout_seconds)),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from(&Defaults::default())
    }
}
