//! User and contact DTOs
//!
//! Users and contacts share one wire shape on both directions: responses
//! decode through [`WirePerson`] and saves send a [`RequestUser`].

use std::collections::HashMap;

use chrono::serde::ts_seconds_option;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{WireError, WireId};
use crate::domain::company::Company;
use crate::domain::contact::{Contact, ContactList};
use crate::domain::person::{Avatar, LocationData, SocialProfile};
use crate::domain::user::{User, UserList};
use crate::dto::company::WireCompany;
use crate::dto::segment::WireSegment;
use crate::dto::tag::WireTag;
use crate::dto::{WireCollection, WireList};
use crate::mapper::{FromWire, ToWire, collection, from_wire_all, non_empty};

// =============================================================================
// Responses
// =============================================================================

/// A user or contact as sent by the API
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WirePerson {
    pub id: WireId,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,
    pub pseudonym: Option<String>,
    pub anonymous: Option<bool>,
    pub avatar: Option<Avatar>,
    pub location_data: Option<LocationData>,
    #[serde(with = "ts_seconds_option")]
    pub signed_up_at: Option<DateTime<Utc>>,
    #[serde(with = "ts_seconds_option")]
    pub remote_created_at: Option<DateTime<Utc>>,
    #[serde(with = "ts_seconds_option")]
    pub last_request_at: Option<DateTime<Utc>>,
    #[serde(with = "ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
    pub session_count: Option<i64>,
    pub last_seen_ip: Option<String>,
    pub last_seen_user_agent: Option<String>,
    pub unsubscribed_from_emails: Option<bool>,
    pub companies: Option<WireCollection<WireCompany>>,
    pub tags: Option<WireCollection<WireTag>>,
    pub segments: Option<WireCollection<WireSegment>>,
    pub social_profiles: Option<WireCollection<WireSocialProfile>>,
    pub custom_attributes: Option<HashMap<String, Value>>,
    pub update_last_request_at: Option<bool>,
    pub new_session: Option<bool>,
}

impl WirePerson {
    /// Fill every field left unset here from `fallback`
    ///
    /// Custom attributes are merged key by key, keeping this record's values.
    pub fn or_fill(self, fallback: WirePerson) -> WirePerson {
        let custom_attributes = match (self.custom_attributes, fallback.custom_attributes) {
            (Some(mut own), Some(other)) => {
                for (key, value) in other {
                    own.entry(key).or_insert(value);
                }
                Some(own)
            }
            (own, other) => own.or(other),
        };

        WirePerson {
            id: match self.id {
                WireId::Absent => fallback.id,
                id => id,
            },
            kind: self.kind.or(fallback.kind),
            user_id: self.user_id.or(fallback.user_id),
            email: self.email.or(fallback.email),
            phone: self.phone.or(fallback.phone),
            name: self.name.or(fallback.name),
            pseudonym: self.pseudonym.or(fallback.pseudonym),
            anonymous: self.anonymous.or(fallback.anonymous),
            avatar: self.avatar.or(fallback.avatar),
            location_data: self.location_data.or(fallback.location_data),
            signed_up_at: self.signed_up_at.or(fallback.signed_up_at),
            remote_created_at: self.remote_created_at.or(fallback.remote_created_at),
            last_request_at: self.last_request_at.or(fallback.last_request_at),
            created_at: self.created_at.or(fallback.created_at),
            updated_at: self.updated_at.or(fallback.updated_at),
            session_count: self.session_count.or(fallback.session_count),
            last_seen_ip: self.last_seen_ip.or(fallback.last_seen_ip),
            last_seen_user_agent: self.last_seen_user_agent.or(fallback.last_seen_user_agent),
            unsubscribed_from_emails: self
                .unsubscribed_from_emails
                .or(fallback.unsubscribed_from_emails),
            companies: self.companies.or(fallback.companies),
            tags: self.tags.or(fallback.tags),
            segments: self.segments.or(fallback.segments),
            social_profiles: self.social_profiles.or(fallback.social_profiles),
            custom_attributes,
            update_last_request_at: self.update_last_request_at,
            new_session: self.new_session,
        }
    }
}

/// Linked social network account
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WireSocialProfile {
    pub id: WireId,
    pub name: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
}

impl FromWire for SocialProfile {
    type Wire = WireSocialProfile;

    fn from_wire(wire: WireSocialProfile) -> Result<Self, WireError> {
        Ok(SocialProfile {
            id: wire.id.into_canonical()?,
            name: wire.name.unwrap_or_default(),
            username: wire.username.unwrap_or_default(),
            url: wire.url.unwrap_or_default(),
        })
    }
}

impl FromWire for User {
    type Wire = WirePerson;

    fn from_wire(wire: WirePerson) -> Result<Self, WireError> {
        Ok(User {
            id: wire.id.into_canonical()?,
            kind: wire.kind.unwrap_or_default(),
            user_id: wire.user_id.unwrap_or_default(),
            email: wire.email.unwrap_or_default(),
            phone: wire.phone.unwrap_or_default(),
            name: wire.name.unwrap_or_default(),
            pseudonym: wire.pseudonym.unwrap_or_default(),
            anonymous: wire.anonymous,
            avatar: wire.avatar,
            location_data: wire.location_data,
            signed_up_at: wire.signed_up_at,
            remote_created_at: wire.remote_created_at,
            last_request_at: wire.last_request_at,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            session_count: wire.session_count,
            last_seen_ip: wire.last_seen_ip.unwrap_or_default(),
            last_seen_user_agent: wire.last_seen_user_agent.unwrap_or_default(),
            unsubscribed_from_emails: wire.unsubscribed_from_emails,
            companies: collection(wire.companies)?,
            tags: collection(wire.tags)?,
            segments: collection(wire.segments)?,
            social_profiles: collection(wire.social_profiles)?,
            custom_attributes: wire.custom_attributes.unwrap_or_default(),
            update_last_request_at: wire.update_last_request_at,
            new_session: wire.new_session,
        })
    }
}

impl FromWire for Contact {
    type Wire = WirePerson;

    fn from_wire(wire: WirePerson) -> Result<Self, WireError> {
        Ok(Contact {
            id: wire.id.into_canonical()?,
            kind: wire.kind.unwrap_or_default(),
            user_id: wire.user_id.unwrap_or_default(),
            email: wire.email.unwrap_or_default(),
            phone: wire.phone.unwrap_or_default(),
            name: wire.name.unwrap_or_default(),
            pseudonym: wire.pseudonym.unwrap_or_default(),
            avatar: wire.avatar,
            location_data: wire.location_data,
            last_request_at: wire.last_request_at,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            session_count: wire.session_count,
            last_seen_ip: wire.last_seen_ip.unwrap_or_default(),
            last_seen_user_agent: wire.last_seen_user_agent.unwrap_or_default(),
            unsubscribed_from_emails: wire.unsubscribed_from_emails,
            companies: collection(wire.companies)?,
            tags: collection(wire.tags)?,
            segments: collection(wire.segments)?,
            social_profiles: collection(wire.social_profiles)?,
            custom_attributes: wire.custom_attributes.unwrap_or_default(),
            update_last_request_at: wire.update_last_request_at,
            new_session: wire.new_session,
        })
    }
}

impl FromWire for UserList {
    type Wire = WireList<WirePerson>;

    fn from_wire(wire: WireList<WirePerson>) -> Result<Self, WireError> {
        Ok(UserList {
            users: from_wire_all(wire.items)?,
            pages: wire.pages,
            total_count: wire.total_count,
            scroll_param: wire.scroll_param.unwrap_or_default(),
        })
    }
}

impl FromWire for ContactList {
    type Wire = WireList<WirePerson>;

    fn from_wire(wire: WireList<WirePerson>) -> Result<Self, WireError> {
        Ok(ContactList {
            contacts: from_wire_all(wire.items)?,
            pages: wire.pages,
            total_count: wire.total_count,
            scroll_param: wire.scroll_param.unwrap_or_default(),
        })
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Sparse payload for saving a user or contact
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "ts_seconds_option")]
    pub signed_up_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "ts_seconds_option")]
    pub remote_created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "ts_seconds_option")]
    pub last_request_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed_from_emails: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub companies: Vec<UserCompany>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_attributes: HashMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_last_request_at: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_session: Option<bool>,
}

/// A company reference inside a [`RequestUser`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserCompany {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<bool>,
}

impl From<&Company> for UserCompany {
    fn from(company: &Company) -> Self {
        UserCompany {
            id: non_empty(&company.id),
            company_id: non_empty(&company.company_id),
            name: non_empty(&company.name),
            remove: company.remove,
        }
    }
}

/// Payload for `POST /contacts/convert`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertRequest {
    pub contact: RequestUser,
    pub user: RequestUser,
}

impl ConvertRequest {
    /// Convert `contact` into `user`
    ///
    /// Only the identifying fields of the target user are sent.
    pub fn new(contact: &Contact, user: &User) -> Self {
        ConvertRequest {
            contact: contact.to_wire(),
            user: RequestUser {
                id: non_empty(&user.id),
                user_id: non_empty(&user.user_id),
                email: non_empty(&user.email),
                signed_up_at: user.signed_up_at,
                ..Default::default()
            },
        }
    }
}

impl ToWire for User {
    type Payload = RequestUser;

    fn to_wire(&self) -> RequestUser {
        RequestUser {
            id: non_empty(&self.id),
            email: non_empty(&self.email),
            phone: non_empty(&self.phone),
            user_id: non_empty(&self.user_id),
            name: non_empty(&self.name),
            signed_up_at: self.signed_up_at,
            remote_created_at: self.remote_created_at,
            last_request_at: self.last_request_at,
            last_seen_ip: non_empty(&self.last_seen_ip),
            last_seen_user_agent: non_empty(&self.last_seen_user_agent),
            unsubscribed_from_emails: self.unsubscribed_from_emails,
            companies: self.companies.iter().map(UserCompany::from).collect(),
            custom_attributes: self.custom_attributes.clone(),
            update_last_request_at: self.update_last_request_at,
            new_session: self.new_session,
        }
    }
}

impl ToWire for Contact {
    type Payload = RequestUser;

    fn to_wire(&self) -> RequestUser {
        RequestUser {
            id: non_empty(&self.id),
            email: non_empty(&self.email),
            phone: non_empty(&self.phone),
            user_id: non_empty(&self.user_id),
            name: non_empty(&self.name),
            last_request_at: self.last_request_at,
            last_seen_ip: non_empty(&self.last_seen_ip),
            last_seen_user_agent: non_empty(&self.last_seen_user_agent),
            unsubscribed_from_emails: self.unsubscribed_from_emails,
            companies: self.companies.iter().map(UserCompany::from).collect(),
            custom_attributes: self.custom_attributes.clone(),
            update_last_request_at: self.update_last_request_at,
            new_session: self.new_session,
            ..Default::default()
        }
    }
}
