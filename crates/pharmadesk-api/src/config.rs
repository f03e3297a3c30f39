//! Client configuration: where the backend lives and how long we wait.

use std::time::Duration;

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Default backend endpoint, matching the stock deployment.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:19230/api/v1";
/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ENV_API_URL: &str = "PHARMADESK_API_URL";
const ENV_TIMEOUT_SECS: &str = "PHARMADESK_TIMEOUT_SECS";

/// Settings for one [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are joined onto. Always ends in `/` so
    /// `Url::join` appends instead of replacing the last path segment.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with the default timeout.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: ensure_trailing_slash(base_url),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve from `PHARMADESK_API_URL` / `PHARMADESK_TIMEOUT_SECS`, falling
    /// back to the stock deployment defaults.
    pub fn from_env() -> ApiResult<Self> {
        let raw_url = std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let base_url = raw_url
            .parse::<Url>()
            .map_err(|_| ApiError::Config { name: ENV_API_URL })?;

        let timeout = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => Duration::from_secs(raw.parse::<u64>().map_err(|_| ApiError::Config {
                name: ENV_TIMEOUT_SECS,
            })?),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self::new(base_url).with_timeout(timeout))
    }
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let config = ClientConfig::new(Url::parse("http://host:19230/api/v1").unwrap());
        assert_eq!(config.base_url.as_str(), "http://host:19230/api/v1/");
        assert_eq!(
            config.base_url.join("user/login").unwrap().as_str(),
            "http://host:19230/api/v1/user/login"
        );
    }

    #[test]
    fn existing_slash_is_preserved() {
        let config = ClientConfig::new(Url::parse("http://host/api/v1/").unwrap());
        assert_eq!(config.base_url.as_str(), "http://host/api/v1/");
    }
}
