//! User domain model

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::company::Company;
use crate::domain::message::MessageAddress;
use crate::domain::pages::PageParams;
use crate::domain::person::{Avatar, LocationData, SocialProfile};
use crate::domain::segment::Segment;
use crate::domain::tag::Tag;

/// A user of the integrating application
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    /// Intercom-assigned id
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// The integrating application's own id for this user
    pub user_id: String,
    pub email: String,
    pub phone: String,
    pub name: String,
    pub pseudonym: String,
    pub anonymous: Option<bool>,
    pub avatar: Option<Avatar>,
    pub location_data: Option<LocationData>,
    pub signed_up_at: Option<DateTime<Utc>>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub last_request_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub session_count: Option<i64>,
    pub last_seen_ip: String,
    pub last_seen_user_agent: String,
    pub unsubscribed_from_emails: Option<bool>,
    pub companies: Vec<Company>,
    pub tags: Vec<Tag>,
    pub segments: Vec<Segment>,
    pub social_profiles: Vec<SocialProfile>,
    pub custom_attributes: HashMap<String, serde_json::Value>,
    /// Ask the server to bump `last_request_at` on save
    pub update_last_request_at: Option<bool>,
    /// Ask the server to count this save as a new session
    pub new_session: Option<bool>,
}

impl User {
    /// Address for messaging this user
    pub fn message_address(&self) -> MessageAddress {
        MessageAddress::new("user", &self.id).with_person(&self.email, &self.user_id)
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[intercom] user {{ id: {} name: {}, user_id: {}, email: {} }}",
            self.id, self.name, self.user_id, self.email
        )
    }
}

/// One page of users
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserList {
    pub users: Vec<User>,
    pub pages: Option<PageParams>,
    pub total_count: Option<i64>,
    /// Cursor for the next scroll step; empty when there are no more pages
    pub scroll_param: String,
}

/// Filters for listing users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub tag_id: Option<String>,
    pub segment_id: Option<String>,
}
