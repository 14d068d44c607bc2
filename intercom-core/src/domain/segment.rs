//! Segment domain model

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A saved filter over users or contacts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    /// Whether the segment matches users or contacts
    pub person_type: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// All segments of the workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentList {
    pub segments: Vec<Segment>,
}
