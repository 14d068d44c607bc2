//! HTTP transport
//!
//! Repositories never talk to the network themselves: they go through an
//! injected [`HttpClient`]. [`ReqwestClient`] is the default implementation.
//! Authentication, retries and rate limiting are the transport's business and
//! are configured on the underlying `reqwest::Client`.

use async_trait::async_trait;
use intercom_core::Query;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// HTTP capability used by the repositories
///
/// Each call returns the raw response body. Implementations must be safe to
/// share across tasks.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// `GET path?query`
    async fn get(&self, path: &str, query: &Query) -> Result<Vec<u8>, TransportError>;

    /// `POST path` with a JSON body
    async fn post(&self, path: &str, body: &Value) -> Result<Vec<u8>, TransportError>;

    /// `DELETE path`, optionally with a JSON body
    async fn delete(&self, path: &str, body: Option<&Value>) -> Result<Vec<u8>, TransportError>;
}

/// [`HttpClient`] backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    /// Base URL of the API (e.g., "https://api.intercom.io")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ReqwestClient {
    /// Create a client with a default reqwest configuration
    ///
    /// # Example
    /// ```
    /// use intercom_client::ReqwestClient;
    ///
    /// let http = ReqwestClient::new("https://api.intercom.io/");
    /// assert_eq!(http.base_url(), "https://api.intercom.io");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client over a configured reqwest Client
    ///
    /// This is where authentication headers, proxies and TLS settings go.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = config.http_client_builder().build()?;
        Ok(Self::with_client(config.base_url.clone(), client))
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the body of a successful response
    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, TransportError> {
        let response = request.header(ACCEPT, "application/json").send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Request failed with status {}: {}", status, error_text);
            return Err(TransportError::api_error(status.as_u16(), error_text));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, path: &str, query: &Query) -> Result<Vec<u8>, TransportError> {
        tracing::debug!("GET {} ({} query params)", path, query.pairs().len());
        let request = self.client.get(self.url(path)).query(query.pairs());
        self.send(request).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Vec<u8>, TransportError> {
        tracing::debug!("POST {}", path);
        let request = self.client.post(self.url(path)).json(body);
        self.send(request).await
    }

    async fn delete(&self, path: &str, body: Option<&Value>) -> Result<Vec<u8>, TransportError> {
        tracing::debug!("DELETE {}", path);
        let mut request = self.client.delete(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await
    }
}
