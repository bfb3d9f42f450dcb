use std::env;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "TICKWATCH_ALPHAVANTAGE_API_KEY";
/// Environment variable overriding the provider base URL.
pub const BASE_URL_ENV: &str = "TICKWATCH_ALPHAVANTAGE_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Provider connection settings. The credential is optional at load
/// time; the client reports `NotConfigured` when a request is attempted
/// without one, so configuration problems surface as typed errors
/// instead of a startup crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    /// Read configuration from the environment. A missing base URL falls
    /// back to the public endpoint; a missing key stays `None`.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| String::from(DEFAULT_BASE_URL));
        let api_key = env::var(API_KEY_ENV).ok();
        Self::new(base_url, api_key)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = if key.trim().is_empty() { None } else { Some(key) };
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_endpoint_without_credential() {
        let config = ProviderConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let config = ProviderConfig::default().with_api_key("   ");
        assert!(config.api_key.is_none());
    }
}
