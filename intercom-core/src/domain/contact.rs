//! Contact domain model
//!
//! Contacts (leads) are anonymous or semi-identified people who have not yet
//! signed up. They can later be converted into a [`User`](crate::domain::user::User).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::company::Company;
use crate::domain::message::MessageAddress;
use crate::domain::pages::PageParams;
use crate::domain::person::{Avatar, LocationData, SocialProfile};
use crate::domain::segment::Segment;
use crate::domain::tag::Tag;

/// A lead
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: String,
    pub email: String,
    pub phone: String,
    pub name: String,
    pub pseudonym: String,
    pub avatar: Option<Avatar>,
    pub location_data: Option<LocationData>,
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
    pub update_last_request_at: Option<bool>,
    pub new_session: Option<bool>,
}

impl Contact {
    /// Address for messaging this contact
    pub fn message_address(&self) -> MessageAddress {
        MessageAddress::new("contact", &self.id).with_person(&self.email, &self.user_id)
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[intercom] contact {{ id: {} name: {}, user_id: {}, email: {} }}",
            self.id, self.name, self.user_id, self.email
        )
    }
}

/// One page of contacts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactList {
    pub contacts: Vec<Contact>,
    pub pages: Option<PageParams>,
    pub total_count: Option<i64>,
    pub scroll_param: String,
}

/// Filters for listing contacts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub email: Option<String>,
    pub tag_id: Option<String>,
    pub segment_id: Option<String>,
}
