//! Message addressing
//!
//! When an entity is the sender or recipient of a message only its type and
//! id are needed, plus the email/user_id for people. Addresses are always
//! derived from a loaded entity via its `message_address()` method.

use serde::Serialize;

/// Minimal projection of an entity used to address messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageAddress {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    user_id: String,
}

impl MessageAddress {
    pub(crate) fn new(kind: &'static str, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
            email: String::new(),
            user_id: String::new(),
        }
    }

    pub(crate) fn with_person(mut self, email: &str, user_id: &str) -> Self {
        self.email = email.to_string();
        self.user_id = user_id.to_string();
        self
    }

    /// Entity type ("user", "contact" or "admin")
    pub fn kind(&self) -> &str {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
