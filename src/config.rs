//! Client configuration.
//!
//! Defaults target a search server running locally; every field can be
//! overridden through the builder or the `RAGCHAT_*` environment variables.

use std::time::Duration;

/// Default server origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default streaming search path.
pub const DEFAULT_ENDPOINT: &str = "/rag_search";
/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const ENV_BASE_URL: &str = "RAGCHAT_BASE_URL";
pub const ENV_ENDPOINT: &str = "RAGCHAT_ENDPOINT";
pub const ENV_CONNECT_TIMEOUT: &str = "RAGCHAT_CONNECT_TIMEOUT";
pub const ENV_LOG: &str = "RAGCHAT_LOG";

/// Configuration for the chat client.
///
/// # Example
///
/// ```ignore
/// use ragchat::config::ChatConfig;
///
/// let config = ChatConfig::default()
///     .with_base_url("http://search.internal:9000")
///     .with_connect_timeout_secs(3);
/// assert_eq!(config.stream_url("rust"), "http://search.internal:9000/rag_search?q=rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Server origin, without a trailing slash
    pub base_url: String,
    /// Path of the streaming search endpoint
    pub endpoint: String,
    /// Seconds to wait for the TCP/TLS connection
    pub connect_timeout_secs: u64,
    /// Fallback tracing filter
    pub log_filter: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server origin. A trailing `/` is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the endpoint path. A missing leading `/` is added.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = if endpoint.starts_with('/') {
            endpoint
        } else {
            format!("/{}", endpoint)
        };
        self
    }

    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by any `RAGCHAT_*` variables that are set.
    ///
    /// Unusable values are skipped silently; [`ChatConfig::env_warnings`]
    /// describes them once logging is up.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            config = config.with_endpoint(endpoint);
        }
        if let Ok(raw) = std::env::var(ENV_CONNECT_TIMEOUT) {
            if let Ok(secs) = raw.trim().parse::<u64>() {
                config = config.with_connect_timeout_secs(secs);
            }
        }
        if let Ok(filter) = std::env::var(ENV_LOG) {
            config = config.with_log_filter(filter);
        }

        config
    }

    /// `RAGCHAT_*` values that `from_env` had to ignore.
    pub fn env_warnings() -> Vec<String> {
        let mut warnings = Vec::new();
        if let Ok(raw) = std::env::var(ENV_CONNECT_TIMEOUT) {
            if raw.trim().parse::<u64>().is_err() {
                warnings.push(format!(
                    "Ignoring {}={:?}: not a number of seconds",
                    ENV_CONNECT_TIMEOUT, raw
                ));
            }
        }
        warnings
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Full URL of the stream request for `query`.
    pub fn stream_url(&self, query: &str) -> String {
        format!(
            "{}{}?q={}",
            self.base_url,
            self.endpoint,
            urlencoding::encode(query)
        )
    }
}
