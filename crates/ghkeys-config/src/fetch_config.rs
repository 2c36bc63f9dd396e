use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, PROJECT_URL};

use serde::Deserialize;

// Fetch constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

pub const MIN_CONCURRENCY: usize = 1;
pub const MAX_CONCURRENCY: usize = 64;
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Settings for talking to the key listing endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base URL; keys are requested from `{base_url}/{user}.keys`
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of requests in flight
    pub concurrency: usize,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::fetch(format!(
                "fetch.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::fetch(format!(
                "fetch.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.concurrency < MIN_CONCURRENCY || self.concurrency > MAX_CONCURRENCY {
            return Err(ConfigError::fetch(format!(
                "fetch.concurrency must be {}-{}, got {}",
                MIN_CONCURRENCY, MAX_CONCURRENCY, self.concurrency
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::fetch("fetch.user_agent cannot be empty"));
        }

        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("ghkeys/{} (+{})", env!("CARGO_PKG_VERSION"), PROJECT_URL)
}
