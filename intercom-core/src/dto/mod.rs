//! Data Transfer Objects for the Intercom wire format
//!
//! Response DTOs (`Wire*`) mirror what the API sends, keeping every field
//! optional and the `id` in its raw [`WireId`](crate::codec::WireId) form.
//! Request DTOs (`Request*`) are the sparse payloads produced by
//! [`ToWire`](crate::mapper::ToWire).
//!
//! The `FromWire`/`ToWire` implementations for each domain type live next to
//! its DTOs.

pub mod admin;
pub mod company;
pub mod params;
pub mod person;
pub mod segment;
pub mod tag;

use serde::Deserialize;

use crate::domain::pages::PageParams;

/// A list response
///
/// The items key is named after the resource (`users`, `tags`, ...); all of
/// them land in `items`.
#[derive(Debug, Deserialize)]
pub struct WireList<T> {
    #[serde(
        default = "Vec::new",
        alias = "users",
        alias = "contacts",
        alias = "companies",
        alias = "admins",
        alias = "tags",
        alias = "segments",
        alias = "social_profiles"
    )]
    pub items: Vec<T>,
    #[serde(default)]
    pub pages: Option<PageParams>,
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub scroll_param: Option<String>,
}

/// A collection nested inside an entity
///
/// Responses wrap nested collections in a list object
/// (`{"type": "company.list", "companies": [...]}`) while request payloads
/// send a bare array; both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireCollection<T> {
    Bare(Vec<T>),
    Wrapped(WireList<T>),
}

impl<T> WireCollection<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            WireCollection::Bare(items) => items,
            WireCollection::Wrapped(list) => list.items,
        }
    }
}
