//! Intercom HTTP Client
//!
//! A typed client for the Intercom REST API: users, contacts, companies,
//! admins, tags and segments.
//!
//! Every resource has a repository trait (e.g. [`UserRepository`]) and an
//! HTTP implementation that turns identifiers and parameters into requests on
//! an injected [`HttpClient`]. [`IntercomClient`] hands out all of them over
//! one shared transport. Scroll endpoints can be walked page by page with a
//! [`Scroller`].
//!
//! # Example
//!
//! ```no_run
//! use intercom_client::{IntercomClient, ScrollSource, UserIdentifiers, UserRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = IntercomClient::new("https://api.intercom.io");
//!
//!     // Look up a single user
//!     let user = client.users().find(&UserIdentifiers::by_email("ada@example.com")).await?;
//!     println!("{}", user);
//!
//!     // Export every user
//!     let users = client.users();
//!     let mut scroller = users.scroller();
//!     while let Some(page) = scroller.next_page().await? {
//!         println!("{} users", page.users.len());
//!     }
//!     Ok(())
//! }
//! ```

mod api;
pub mod config;
pub mod error;
pub mod pager;
pub mod repository;
pub mod transport;

#[cfg(test)]
mod testing;

use std::sync::Arc;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ClientError, Result, TransportError};
pub use intercom_core::{CompanyIdentifiers, UserIdentifiers};
pub use pager::{ScrollPage, ScrollSource, Scroller};
pub use repository::{
    AdminRepository, CompanyRepository, ContactRepository, HttpAdminRepository,
    HttpCompanyRepository, HttpContactRepository, HttpSegmentRepository, HttpTagRepository,
    HttpUserRepository, SegmentRepository, TagRepository, UserRepository,
};
pub use transport::{HttpClient, ReqwestClient};

use api::Api;

/// Entry point to every resource repository
///
/// Cloning is cheap: all clones share the same transport.
#[derive(Clone)]
pub struct IntercomClient {
    api: Api,
}

impl IntercomClient {
    /// Create a client over a default [`ReqwestClient`]
    ///
    /// The default client sends no credentials. Use
    /// [`with_http`](Self::with_http) with a configured `reqwest::Client` to
    /// authenticate.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(Arc::new(ReqwestClient::new(base_url)))
    }

    /// Create a client over any [`HttpClient`]
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use intercom_client::{IntercomClient, ReqwestClient};
    /// use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
    ///
    /// let mut headers = HeaderMap::new();
    /// headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer secret"));
    /// let http_client = reqwest::Client::builder()
    ///     .default_headers(headers)
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = IntercomClient::with_http(Arc::new(ReqwestClient::with_client(
    ///     "https://api.intercom.io",
    ///     http_client,
    /// )));
    /// ```
    pub fn with_http(http: Arc<dyn HttpClient>) -> Self {
        Self {
            api: Api::new(http),
        }
    }

    /// Create a client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = ReqwestClient::from_config(config)?;
        Ok(Self::with_http(Arc::new(http)))
    }

    pub fn users(&self) -> HttpUserRepository {
        HttpUserRepository::new(self.api.clone())
    }

    pub fn contacts(&self) -> HttpContactRepository {
        HttpContactRepository::new(self.api.clone())
    }

    pub fn companies(&self) -> HttpCompanyRepository {
        HttpCompanyRepository::new(self.api.clone())
    }

    pub fn admins(&self) -> HttpAdminRepository {
        HttpAdminRepository::new(self.api.clone())
    }

    pub fn tags(&self) -> HttpTagRepository {
        HttpTagRepository::new(self.api.clone())
    }

    pub fn segments(&self) -> HttpSegmentRepository {
        HttpSegmentRepository::new(self.api.clone())
    }
}
