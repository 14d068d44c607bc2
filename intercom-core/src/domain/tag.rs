//! Tag domain model

use serde::Serialize;

/// A label applied to users, contacts or companies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

/// All tags of the workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagList {
    pub tags: Vec<Tag>,
}

/// Request to apply (or remove) a tag on a batch of people and companies
///
/// Sent to the API as-is; empty fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaggingList {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<Tagging>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub companies: Vec<Tagging>,
}

/// One target of a [`TaggingList`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tagging {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company_id: String,
    /// `Some(true)` removes the tag from this target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untag: Option<bool>,
}
