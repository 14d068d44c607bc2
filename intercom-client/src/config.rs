//! Client configuration
//!
//! Connection settings for the default HTTP client: API base URL, request
//! timeout and user agent.

use std::time::Duration;

/// Default public API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.intercom.io";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.intercom.io")
    pub base_url: String,

    /// Maximum time for a single request
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("intercom-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - INTERCOM_URL (optional, default: https://api.intercom.io)
    /// - INTERCOM_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            std::env::var("INTERCOM_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(base_url);

        if let Ok(timeout) = std::env::var("INTERCOM_TIMEOUT") {
            let seconds = timeout
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("INTERCOM_TIMEOUT must be a number of seconds"))?;
            config.timeout = Duration::from_secs(seconds);
        }

        Ok(config)
    }

    /// Sets the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// A reqwest builder with the timeout and user agent applied
    ///
    /// Callers that need extra default headers add them before building.
    pub fn http_client_builder(&self) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.intercom.io");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("intercom-rs/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::default();

        // Invalid URL should fail
        config.base_url = "api.intercom.io".to_string();
        assert!(config.validate().is_err());

        config.base_url = String::new();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:8080".to_string();
        assert!(config.validate().is_ok());

        // Zero timeout should fail
        let config = config.with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
