//! Client configuration.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Environment variable holding the service base URL.
pub const ENV_BASE_URL: &str = "ATENEA_BASE_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ATENEA_API_KEY";
/// Environment variable holding the request timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "ATENEA_TIMEOUT_MS";

/// Settings for an [`AteneaClient`](crate::AteneaClient).
///
/// Immutable once built. The base URL is stored without its trailing slash so
/// endpoints can be appended directly.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawClientConfig")]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    timeout: Duration,
}

/// Deserialization shape for [`ClientConfig`].
#[derive(Deserialize)]
struct RawClientConfig {
    base_url: String,
    api_key: String,
    #[serde(default)]
    timeout_ms: Option<u64>,
}

impl From<RawClientConfig> for ClientConfig {
    fn from(raw: RawClientConfig) -> Self {
        let config = Self::new(raw.base_url, raw.api_key);
        match raw.timeout_ms {
            Some(ms) => config.with_timeout_ms(ms),
            None => config,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the default timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Service URL (e.g., `"https://licenses.example.com"`)
    /// * `api_key` - Bearer token sent with every request
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            api_key: api_key.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Set the request timeout. A zero duration keeps the default.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if !timeout.is_zero() {
            self.timeout = timeout;
        }
        self
    }

    /// Set the request timeout in milliseconds. Zero keeps the default.
    #[must_use]
    pub fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    /// Load configuration from `ATENEA_BASE_URL`, `ATENEA_API_KEY` and
    /// the optional `ATENEA_TIMEOUT_MS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or the timeout is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(ENV_BASE_URL).ok_or(ConfigError::MissingVar(ENV_BASE_URL))?;
        let api_key = lookup(ENV_API_KEY).ok_or(ConfigError::MissingVar(ENV_API_KEY))?;

        let config = Self::new(base_url, api_key);
        let Some(raw) = lookup(ENV_TIMEOUT_MS) else {
            tracing::debug!("{ENV_TIMEOUT_MS} not set, using default timeout");
            return Ok(config);
        };

        match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => Ok(config.with_timeout_ms(ms)),
            _ => Err(ConfigError::InvalidValue {
                name: ENV_TIMEOUT_MS,
                value: raw,
            }),
        }
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API key used for bearer authentication.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Strip exactly one trailing `/`.
fn normalize_base_url(mut url: String) -> String {
    if url.ends_with('/') {
        url.pop();
    }
    url
}
