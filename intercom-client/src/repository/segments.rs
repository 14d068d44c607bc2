//! Segments repository

use async_trait::async_trait;
use intercom_core::Query;
use intercom_core::domain::segment::{Segment, SegmentList};

use crate::api::{Api, member_path};
use crate::error::Result;

/// Repository trait for segment operations
#[async_trait]
pub trait SegmentRepository: Send + Sync {
    /// Fetch every segment
    async fn list(&self) -> Result<SegmentList>;

    /// Fetch one segment by id
    async fn find(&self, id: &str) -> Result<Segment>;
}

/// HTTP implementation of SegmentRepository
#[derive(Clone)]
pub struct HttpSegmentRepository {
    api: Api,
}

impl HttpSegmentRepository {
    pub(crate) fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SegmentRepository for HttpSegmentRepository {
    async fn list(&self) -> Result<SegmentList> {
        self.api.get("/segments", &Query::new()).await
    }

    async fn find(&self, id: &str) -> Result<Segment> {
        let path = member_path("segments", "segment", id)?;
        self.api.get(&path, &Query::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockHttp;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[tokio::test]
    async fn test_find_segment() {
        let http = MockHttp::new();
        http.respond(json!({
            "type": "segment",
            "id": "s1",
            "name": "Active",
            "person_type": "user",
            "created_at": 1_394_621_988
        }));
        let segments = HttpSegmentRepository::new(http.api());

        let segment = segments.find("s1").await.unwrap();

        assert_eq!(segment.name, "Active");
        assert_eq!(
            segment.created_at,
            Some(Utc.timestamp_opt(1_394_621_988, 0).unwrap())
        );
        assert_eq!(http.calls()[0].path, "/segments/s1");
    }

    #[tokio::test]
    async fn test_list_segments_accepts_numeric_ids() {
        let http = MockHttp::new();
        http.respond(json!({"type": "segment.list", "segments": [{"id": 7}, {"id": "8"}]}));
        let segments = HttpSegmentRepository::new(http.api());

        let list = segments.list().await.unwrap();

        let ids: Vec<_> = list.segments.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "8"]);
    }
}
