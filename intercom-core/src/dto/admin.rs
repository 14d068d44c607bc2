//! Admin DTOs

use serde::Deserialize;

use crate::codec::{WireError, WireId};
use crate::domain::admin::{Admin, AdminList};
use crate::dto::WireList;
use crate::mapper::{FromWire, from_wire_all};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WireAdmin {
    pub id: WireId,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl FromWire for Admin {
    type Wire = WireAdmin;

    fn from_wire(wire: WireAdmin) -> Result<Self, WireError> {
        Ok(Admin {
            id: wire.id.into_canonical()?,
            kind: wire.kind.unwrap_or_default(),
            name: wire.name.unwrap_or_default(),
            email: wire.email.unwrap_or_default(),
        })
    }
}

impl FromWire for AdminList {
    type Wire = WireList<WireAdmin>;

    fn from_wire(wire: WireList<WireAdmin>) -> Result<Self, WireError> {
        Ok(AdminList {
            admins: from_wire_all(wire.items)?,
        })
    }
}
