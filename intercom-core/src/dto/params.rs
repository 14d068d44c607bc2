//! Query encodings for list filters

use crate::domain::company::CompanyListParams;
use crate::domain::contact::ContactListParams;
use crate::domain::user::UserListParams;
use crate::query::{Query, ToQuery};

impl ToQuery for UserListParams {
    fn to_query(&self) -> Query {
        Query::new()
            .number("page", self.page)
            .number("per_page", self.per_page)
            .text("tag_id", self.tag_id.as_deref())
            .text("segment_id", self.segment_id.as_deref())
    }
}

impl ToQuery for ContactListParams {
    fn to_query(&self) -> Query {
        Query::new()
            .number("page", self.page)
            .number("per_page", self.per_page)
            .text("email", self.email.as_deref())
            .text("tag_id", self.tag_id.as_deref())
            .text("segment_id", self.segment_id.as_deref())
    }
}

impl ToQuery for CompanyListParams {
    fn to_query(&self) -> Query {
        Query::new()
            .number("page", self.page)
            .number("per_page", self.per_page)
            .text("tag_id", self.tag_id.as_deref())
            .text("segment_id", self.segment_id.as_deref())
    }
}

/// Query for one step of a scroll session
///
/// An empty cursor starts a new session and sends no parameter.
pub fn scroll_query(cursor: &str) -> Query {
    Query::new().text("scroll_param", Some(cursor))
}
