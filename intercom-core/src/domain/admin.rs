//! Admin domain model
//!
//! Admins are the teammates of the Intercom workspace.

use serde::Serialize;

use crate::domain::message::MessageAddress;

/// Type reported for the placeholder admin that owns unassigned work
const NOBODY_ADMIN: &str = "nobody_admin";

/// A workspace teammate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Admin {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub email: String,
}

impl Admin {
    /// Whether this is the "Nobody" placeholder admin
    pub fn is_nobody_admin(&self) -> bool {
        self.kind == NOBODY_ADMIN
    }

    /// Address for messages sent by this admin
    pub fn message_address(&self) -> MessageAddress {
        MessageAddress::new("admin", &self.id)
    }
}

impl std::fmt::Display for Admin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[intercom] {} {{ id: {} name: {}, email: {} }}",
            self.kind, self.id, self.name, self.email
        )
    }
}

/// All admins of the workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminList {
    pub admins: Vec<Admin>,
}
