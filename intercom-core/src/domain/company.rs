//! Company domain model

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::pages::PageParams;
use crate::domain::segment::Segment;
use crate::domain::tag::Tag;

/// A company that users and contacts belong to
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Company {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// The integrating application's own id for this company
    pub company_id: String,
    pub name: String,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub last_request_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub session_count: Option<i64>,
    pub monthly_spend: Option<i64>,
    pub user_count: Option<i64>,
    pub plan: Option<Plan>,
    pub tags: Vec<Tag>,
    pub segments: Vec<Segment>,
    pub custom_attributes: HashMap<String, serde_json::Value>,
    /// When saving a person, detach them from this company
    pub remove: Option<bool>,
}

/// Billing plan attached to a company
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
}

/// One page of companies
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyList {
    pub companies: Vec<Company>,
    pub pages: Option<PageParams>,
    pub total_count: Option<i64>,
    pub scroll_param: String,
}

/// Filters for listing companies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub tag_id: Option<String>,
    pub segment_id: Option<String>,
}
