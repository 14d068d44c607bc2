//! Lookup identifiers and route resolution
//!
//! An identifier record carries several optional keys for the same entity.
//! Resolution checks them in a fixed order: the primary `id` first, then the
//! resource's secondary keys. A primary id always wins, even when other keys
//! are also set.

use thiserror::Error;

use crate::query::{Query, ToQuery};

/// No usable identifying field was set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing {resource} identifier")]
pub struct MissingIdentifier {
    /// Resource the lookup was for (e.g. "user")
    pub resource: &'static str,
}

/// Where a lookup request goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Direct lookup at `/{collection}/{id}`
    Path(String),
    /// Collection endpoint filtered by the whole identifier record
    Filter { path: String, query: Query },
}

/// Identifiers for person-like entities (users and contacts)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentifiers {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
}

impl UserIdentifiers {
    /// Look up by Intercom id
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Look up by the caller's own user id
    pub fn by_user_id(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Default::default()
        }
    }

    /// Look up by email address
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Route for a user lookup: id, then user_id or email
    pub fn user_route(&self) -> Result<Route, MissingIdentifier> {
        resolve(
            "users",
            "user",
            self.id.as_deref(),
            &[self.user_id.as_deref(), self.email.as_deref()],
            self,
        )
    }

    /// Route for a contact lookup: id, then user_id
    ///
    /// Email alone does not identify a contact.
    pub fn contact_route(&self) -> Result<Route, MissingIdentifier> {
        resolve(
            "contacts",
            "contact",
            self.id.as_deref(),
            &[self.user_id.as_deref()],
            self,
        )
    }
}

impl ToQuery for UserIdentifiers {
    fn to_query(&self) -> Query {
        Query::new()
            .text("id", self.id.as_deref())
            .text("user_id", self.user_id.as_deref())
            .text("email", self.email.as_deref())
    }
}

/// Identifiers for companies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyIdentifiers {
    pub id: Option<String>,
    pub company_id: Option<String>,
    pub name: Option<String>,
}

impl CompanyIdentifiers {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn by_company_id(company_id: impl Into<String>) -> Self {
        Self {
            company_id: Some(company_id.into()),
            ..Default::default()
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Route for a company lookup: id, then company_id or name
    pub fn route(&self) -> Result<Route, MissingIdentifier> {
        resolve(
            "companies",
            "company",
            self.id.as_deref(),
            &[self.company_id.as_deref(), self.name.as_deref()],
            self,
        )
    }
}

impl ToQuery for CompanyIdentifiers {
    fn to_query(&self) -> Query {
        Query::new()
            .text("id", self.id.as_deref())
            .text("company_id", self.company_id.as_deref())
            .text("name", self.name.as_deref())
    }
}

/// Pick the route for a lookup
///
/// Empty strings count as unset.
pub fn resolve(
    collection: &str,
    resource: &'static str,
    primary: Option<&str>,
    fallbacks: &[Option<&str>],
    record: &impl ToQuery,
) -> Result<Route, MissingIdentifier> {
    if let Some(id) = primary.filter(|id| !id.is_empty()) {
        return Ok(Route::Path(member_path(collection, id)));
    }

    if fallbacks.iter().flatten().any(|value| !value.is_empty()) {
        return Ok(Route::Filter {
            path: format!("/{}", collection),
            query: record.to_query(),
        });
    }

    Err(MissingIdentifier { resource })
}

/// `/{collection}/{id}`, with the id escaped as a single path segment
pub fn member_path(collection: &str, id: &str) -> String {
    format!("/{}/{}", collection, encode_segment(id))
}

/// Percent-encode every byte outside the RFC 3986 unreserved set
fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(char::from(byte))
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
