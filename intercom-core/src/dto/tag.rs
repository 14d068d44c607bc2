//! Tag DTOs

use serde::{Deserialize, Serialize};

use crate::codec::{WireError, WireId};
use crate::domain::tag::{Tag, TagList};
use crate::dto::WireList;
use crate::mapper::{FromWire, ToWire, from_wire_all, non_empty};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WireTag {
    pub id: WireId,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
}

impl FromWire for Tag {
    type Wire = WireTag;

    fn from_wire(wire: WireTag) -> Result<Self, WireError> {
        Ok(Tag {
            id: wire.id.into_canonical()?,
            kind: wire.kind.unwrap_or_default(),
            name: wire.name.unwrap_or_default(),
        })
    }
}

impl FromWire for TagList {
    type Wire = WireList<WireTag>;

    fn from_wire(wire: WireList<WireTag>) -> Result<Self, WireError> {
        Ok(TagList {
            tags: from_wire_all(wire.items)?,
        })
    }
}

/// Payload for creating or renaming a tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ToWire for Tag {
    type Payload = RequestTag;

    fn to_wire(&self) -> RequestTag {
        RequestTag {
            id: non_empty(&self.id),
            name: non_empty(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::decode;
    use serde_json::json;

    #[test]
    fn test_new_tag_sends_name_only() {
        let tag = Tag {
            name: "VIP".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(tag.to_wire()).unwrap(),
            json!({"name": "VIP"})
        );
    }

    #[test]
    fn test_tag_list() {
        let body = br#"{"type":"tag.list","tags":[{"type":"tag","id":17,"name":"VIP"}]}"#;
        let list: TagList = decode(body).unwrap();
        assert_eq!(
            list.tags,
            vec![Tag {
                id: "17".to_string(),
                kind: "tag".to_string(),
                name: "VIP".to_string(),
            }]
        );
    }
}
