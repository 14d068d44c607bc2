//! Company DTOs

use std::collections::HashMap;

use chrono::serde::ts_seconds_option;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{WireError, WireId};
use crate::domain::company::{Company, CompanyList, Plan};
use crate::dto::segment::WireSegment;
use crate::dto::tag::WireTag;
use crate::dto::{WireCollection, WireList};
use crate::mapper::{FromWire, ToWire, collection, from_wire_all, non_empty};

/// A company as sent by the API
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WireCompany {
    pub id: WireId,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub company_id: Option<String>,
    pub name: Option<String>,
    #[serde(with = "ts_seconds_option")]
    pub remote_created_at: Option<DateTime<Utc>>,
    #[serde(with = "ts_seconds_option")]
    pub last_request_at: Option<DateTime<Utc>>,
    #[serde(with = "ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
    pub session_count: Option<i64>,
    pub monthly_spend: Option<i64>,
    pub user_count: Option<i64>,
    pub plan: Option<WirePlan>,
    pub tags: Option<WireCollection<WireTag>>,
    pub segments: Option<WireCollection<WireSegment>>,
    pub custom_attributes: Option<HashMap<String, Value>>,
    pub remove: Option<bool>,
}

/// A plan is an object in responses and a bare name in requests
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WirePlan {
    Name(String),
    Detail {
        #[serde(default)]
        id: WireId,
        #[serde(default)]
        name: Option<String>,
    },
}

impl WirePlan {
    fn into_plan(self) -> Result<Option<Plan>, WireError> {
        let plan = match self {
            WirePlan::Name(name) => Plan {
                id: String::new(),
                name,
            },
            WirePlan::Detail { id, name } => Plan {
                id: id.into_canonical()?,
                name: name.unwrap_or_default(),
            },
        };

        if plan.id.is_empty() && plan.name.is_empty() {
            Ok(None)
        } else {
            Ok(Some(plan))
        }
    }
}

impl FromWire for Company {
    type Wire = WireCompany;

    fn from_wire(wire: WireCompany) -> Result<Self, WireError> {
        let plan = match wire.plan {
            Some(plan) => plan.into_plan()?,
            None => None,
        };

        Ok(Company {
            id: wire.id.into_canonical()?,
            kind: wire.kind.unwrap_or_default(),
            company_id: wire.company_id.unwrap_or_default(),
            name: wire.name.unwrap_or_default(),
            remote_created_at: wire.remote_created_at,
            last_request_at: wire.last_request_at,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            session_count: wire.session_count,
            monthly_spend: wire.monthly_spend,
            user_count: wire.user_count,
            plan,
            tags: collection(wire.tags)?,
            segments: collection(wire.segments)?,
            custom_attributes: wire.custom_attributes.unwrap_or_default(),
            remove: wire.remove,
        })
    }
}

impl FromWire for CompanyList {
    type Wire = WireList<WireCompany>;

    fn from_wire(wire: WireList<WireCompany>) -> Result<Self, WireError> {
        Ok(CompanyList {
            companies: from_wire_all(wire.items)?,
            pages: wire.pages,
            total_count: wire.total_count,
            scroll_param: wire.scroll_param.unwrap_or_default(),
        })
    }
}

/// Sparse payload for saving a company
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestCompany {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "ts_seconds_option")]
    pub remote_created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_spend: Option<i64>,
    /// Plan name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_attributes: HashMap<String, Value>,
}

impl ToWire for Company {
    type Payload = RequestCompany;

    fn to_wire(&self) -> RequestCompany {
        RequestCompany {
            id: non_empty(&self.id),
            company_id: non_empty(&self.company_id),
            name: non_empty(&self.name),
            remote_created_at: self.remote_created_at,
            monthly_spend: self.monthly_spend,
            plan: self.plan.as_ref().and_then(|plan| non_empty(&plan.name)),
            custom_attributes: self.custom_attributes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::decode;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_explicit_zero_spend_is_sent() {
        let company = Company {
            company_id: "acme".to_string(),
            monthly_spend: Some(0),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(company.to_wire()).unwrap(),
            json!({"company_id": "acme", "monthly_spend": 0})
        );
    }

    #[test]
    fn test_plan_is_sent_by_name() {
        let company = Company {
            id: "5".to_string(),
            plan: Some(Plan {
                id: "p1".to_string(),
                name: "pro".to_string(),
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(company.to_wire()).unwrap(),
            json!({"id": "5", "plan": "pro"})
        );
    }

    #[test]
    fn test_round_trip_keeps_set_fields() {
        let mut custom_attributes = HashMap::new();
        custom_attributes.insert("seats".to_string(), json!(12));

        let company = Company {
            id: "5".to_string(),
            company_id: "acme".to_string(),
            name: "Acme".to_string(),
            monthly_spend: Some(250),
            plan: Some(Plan {
                id: String::new(),
                name: "pro".to_string(),
            }),
            custom_attributes,
            ..Default::default()
        };

        let bytes = serde_json::to_vec(&company.to_wire()).unwrap();
        let decoded: Company = decode(&bytes).unwrap();
        assert_eq!(decoded, company);
    }

    #[test]
    fn test_round_trip_keeps_every_writable_field() {
        let mut custom_attributes = HashMap::new();
        custom_attributes.insert("seats".to_string(), json!(12));
        custom_attributes.insert("region".to_string(), json!("emea"));

        let company = Company {
            id: "5".to_string(),
            company_id: "acme".to_string(),
            name: "Acme".to_string(),
            remote_created_at: Some(Utc.timestamp_opt(1_300_000_000, 0).unwrap()),
            monthly_spend: Some(0),
            plan: Some(Plan {
                id: String::new(),
                name: "pro".to_string(),
            }),
            custom_attributes,
            ..Default::default()
        };

        let bytes = serde_json::to_vec(&company.to_wire()).unwrap();
        let decoded: Company = decode(&bytes).unwrap();
        assert_eq!(decoded, company);
    }

    #[test]
    fn test_decodes_api_company() {
        let body = json!({
            "type": "company",
            "id": 531,
            "company_id": "acme",
            "name": "Acme",
            "plan": {"type": "plan", "id": 9, "name": "pro"},
            "monthly_spend": 49,
            "user_count": 3,
            "tags": {"type": "tag.list", "tags": []}
        });
        let company: Company = decode(body.to_string().as_bytes()).unwrap();

        assert_eq!(company.id, "531");
        assert_eq!(
            company.plan,
            Some(Plan {
                id: "9".to_string(),
                name: "pro".to_string()
            })
        );
        assert_eq!(company.monthly_spend, Some(49));
        assert_eq!(company.user_count, Some(3));
    }

    #[test]
    fn test_empty_plan_object_is_no_plan() {
        let body = json!({"id": "1", "plan": {}});
        let company: Company = decode(body.to_string().as_bytes()).unwrap();
        assert_eq!(company.plan, None);
    }

    #[test]
    fn test_company_list() {
        let body = json!({
            "type": "company.list",
            "companies": [{"id": 1}, {"id": 2}],
            "pages": {"type": "pages", "page": 1, "per_page": 50, "total_pages": 1},
            "total_count": 2
        });
        let list: CompanyList = decode(body.to_string().as_bytes()).unwrap();
        assert_eq!(list.companies.len(), 2);
        assert_eq!(list.total_count, Some(2));
        assert_eq!(list.pages.unwrap().per_page, Some(50));
        assert_eq!(list.scroll_param, "");
    }
}
