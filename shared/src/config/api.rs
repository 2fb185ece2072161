//! REST API configuration

use serde::{Deserialize, Serialize};

use crate::utils::validation::validators;

/// Base URL used when no environment value is supplied
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// REST API client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            request_timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// `API_BASE_URL` wins over the shorter `API_BASE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, test fixtures)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("API_BASE_URL")
            .or_else(|| lookup("API_BASE"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let request_timeout_secs = lookup("API_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout);

        Self {
            base_url,
            request_timeout_secs,
            ..Default::default()
        }
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Base URL without a trailing slash
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check the base URL looks like an HTTP(S) URL and the timeout is usable
    pub fn validate(&self) -> Result<(), String> {
        if !validators::is_valid_url(&self.base_url) {
            return Err(format!("Invalid API base URL: {}", self.base_url));
        }
        if self.request_timeout_secs == 0 {
            return Err("API request timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("newsfeed-client/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ApiConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_api_base_url_wins_over_api_base() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("API_BASE", "http://fallback:1"),
            ("API_BASE_URL", "https://api.example.com/"),
            ("API_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.base_url, "https://api.example.com/");
        assert_eq!(config.normalized_base_url(), "https://api.example.com");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_unparsable_timeout_falls_back() {
        let config = ApiConfig::from_lookup(lookup_from(&[("API_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let config = ApiConfig::new("http://localhost").with_timeout_secs(0);
        assert!(config.validate().is_err());
    }
}
