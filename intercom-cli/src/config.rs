//! Configuration module
//!
//! Global CLI settings and construction of the API client from them.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use intercom_client::{ClientConfig, IntercomClient, ReqwestClient};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL
    pub url: String,
    /// Bearer token, if any
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Print raw JSON instead of summaries
    pub json: bool,
}

impl Config {
    /// Build an API client, installing the token as a default header
    pub fn client(&self) -> Result<IntercomClient> {
        let client_config =
            ClientConfig::new(self.url.clone()).with_timeout(Duration::from_secs(self.timeout));
        client_config.validate()?;

        let mut builder = client_config.http_client_builder();
        if let Some(token) = &self.token {
            builder = builder.default_headers(auth_headers(token)?);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        tracing::debug!("Using API at {}", client_config.base_url);
        Ok(IntercomClient::with_http(Arc::new(
            ReqwestClient::with_client(client_config.base_url, http),
        )))
    }
}

fn auth_headers(token: &str) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
        .context("Access token contains invalid header characters")?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
