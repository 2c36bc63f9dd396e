use crate::{CliError, CliResult, FetchError, KeyFetcher};

use std::time::Duration;

use ghkeys_config::FetchConfig;
use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Client as ReqwestClient, StatusCode};

/// HTTP client for the `{base_url}/{user}.keys` listing endpoint
pub struct GitHubClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl GitHubClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "https://github.com")
    /// * `user_agent` - Value of the User-Agent header sent with every request
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> CliResult<Self> {
        let client = ReqwestClient::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(CliError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &FetchConfig) -> CliResult<Self> {
        Self::new(
            &config.base_url,
            &config.user_agent,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn keys_url(&self, user: &str) -> String {
        format!("{}/{}.keys", self.base_url, user)
    }
}

impl KeyFetcher for GitHubClient {
    async fn fetch(&self, user: &str) -> Result<Vec<String>, FetchError> {
        let url = self.keys_url(user);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        if is_html(response.headers()) {
            return Err(FetchError::Malformed {
                message: String::from("expected a plain-text key listing, got HTML"),
            });
        }

        let body = response.text().await.map_err(FetchError::from_body)?;
        Ok(split_key_lines(&body))
    }
}

/// Split a key listing into trimmed, non-empty lines, preserving order.
pub fn split_key_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with("text/html"))
}
