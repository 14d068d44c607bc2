//! Segment DTOs

use chrono::serde::ts_seconds_option;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::codec::{WireError, WireId};
use crate::domain::segment::{Segment, SegmentList};
use crate::dto::WireList;
use crate::mapper::{FromWire, from_wire_all};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WireSegment {
    pub id: WireId,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub person_type: Option<String>,
    #[serde(with = "ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FromWire for Segment {
    type Wire = WireSegment;

    fn from_wire(wire: WireSegment) -> Result<Self, WireError> {
        Ok(Segment {
            id: wire.id.into_canonical()?,
            kind: wire.kind.unwrap_or_default(),
            name: wire.name.unwrap_or_default(),
            person_type: wire.person_type.unwrap_or_default(),
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        })
    }
}

impl FromWire for SegmentList {
    type Wire = WireList<WireSegment>;

    fn from_wire(wire: WireList<WireSegment>) -> Result<Self, WireError> {
        Ok(SegmentList {
            segments: from_wire_all(wire.items)?,
        })
    }
}
