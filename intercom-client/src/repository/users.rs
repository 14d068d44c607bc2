//! Users repository
//!
//! Handles the `/users` endpoints:
//! - Looking up a user by id, user_id or email
//! - Listing one page at a time, optionally by tag or segment
//! - Scrolling through every user
//! - Creating or updating (the API picks based on the presence of `id`)
//! - Deleting

use async_trait::async_trait;
use intercom_core::domain::user::{User, UserList, UserListParams};
use intercom_core::dto::params::scroll_query;
use intercom_core::{ToQuery, UserIdentifiers};

use crate::api::{Api, member_path};
use crate::error::Result;
use crate::pager::ScrollSource;

/// Repository trait for user operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a single user
    ///
    /// A set `id` is looked up directly; otherwise the whole record is sent
    /// as a filter. Fails with `MissingIdentifier` before any request when no
    /// field is set.
    async fn find(&self, identifiers: &UserIdentifiers) -> Result<User>;

    /// Fetch one page of users
    async fn list(&self, params: &UserListParams) -> Result<UserList>;

    /// Fetch one scroll step; an empty cursor starts a new session
    async fn scroll(&self, cursor: &str) -> Result<UserList>;

    /// Create or update a user from its set fields
    async fn save(&self, user: &User) -> Result<User>;

    /// Delete a user by Intercom id, returning its last representation
    async fn delete(&self, id: &str) -> Result<User>;
}

/// HTTP implementation of UserRepository
#[derive(Clone)]
pub struct HttpUserRepository {
    api: Api,
}

impl HttpUserRepository {
    pub(crate) fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn find(&self, identifiers: &UserIdentifiers) -> Result<User> {
        let route = identifiers.user_route()?;
        self.api.find(route).await
    }

    async fn list(&self, params: &UserListParams) -> Result<UserList> {
        self.api.get("/users", &params.to_query()).await
    }

    async fn scroll(&self, cursor: &str) -> Result<UserList> {
        self.api.get("/users/scroll", &scroll_query(cursor)).await
    }

    async fn save(&self, user: &User) -> Result<User> {
        self.api.save("/users", user).await
    }

    async fn delete(&self, id: &str) -> Result<User> {
        let path = member_path("users", "user", id)?;
        self.api
            .delete(&path, || User {
                id: id.to_string(),
                ..Default::default()
            })
            .await
    }
}

#[async_trait]
impl ScrollSource for HttpUserRepository {
    type Page = UserList;

    async fn fetch_page(&self, cursor: &str) -> Result<UserList> {
        self.scroll(cursor).await
    }
}
