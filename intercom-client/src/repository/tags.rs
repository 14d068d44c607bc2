//! Tags repository
//!
//! Tags are created, renamed and applied through `POST /tags`: a plain tag
//! payload creates or renames, a [`TaggingList`] applies the tag to (or
//! removes it from) a batch of users and companies.

use async_trait::async_trait;
use intercom_core::Query;
use intercom_core::domain::tag::{Tag, TagList, TaggingList};
use intercom_core::decode;

use crate::api::{Api, member_path};
use crate::error::Result;

/// Repository trait for tag operations
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Fetch every tag
    async fn list(&self) -> Result<TagList>;

    /// Create a tag, or rename it when `id` is set
    async fn save(&self, tag: &Tag) -> Result<Tag>;

    /// Delete a tag by id; the response body is ignored
    async fn delete(&self, id: &str) -> Result<()>;

    /// Apply or remove a tag on every target of the list
    async fn tag(&self, tagging: &TaggingList) -> Result<Tag>;
}

/// HTTP implementation of TagRepository
#[derive(Clone)]
pub struct HttpTagRepository {
    api: Api,
}

impl HttpTagRepository {
    pub(crate) fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TagRepository for HttpTagRepository {
    async fn list(&self) -> Result<TagList> {
        self.api.get("/tags", &Query::new()).await
    }

    async fn save(&self, tag: &Tag) -> Result<Tag> {
        self.api.save("/tags", tag).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let path = member_path("tags", "tag", id)?;
        self.api.delete_discarding(&path).await
    }

    async fn tag(&self, tagging: &TaggingList) -> Result<Tag> {
        let bytes = self.api.post_raw("/tags", tagging).await?;
        Ok(decode(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockHttp;
    use intercom_core::domain::tag::Tagging;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_save_new_tag_sends_name() {
        let http = MockHttp::new();
        http.respond(json!({"type": "tag", "id": 17, "name": "VIP"}));
        let tags = HttpTagRepository::new(http.api());

        let tag = tags
            .save(&Tag {
                name: "VIP".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(tag.id, "17");
        assert_eq!(http.calls()[0].body, Some(json!({"name": "VIP"})));
    }

    #[tokio::test]
    async fn test_tagging_posts_targets() {
        let http = MockHttp::new();
        http.respond(json!({"type": "tag", "id": "17", "name": "VIP"}));
        let tags = HttpTagRepository::new(http.api());

        let tagging = TaggingList {
            name: "VIP".to_string(),
            users: vec![Tagging {
                user_id: "25".to_string(),
                untag: Some(true),
                ..Default::default()
            }],
            companies: Vec::new(),
        };
        tags.tag(&tagging).await.unwrap();

        let calls = http.calls();
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].path, "/tags");
        assert_eq!(
            calls[0].body,
            Some(json!({"name": "VIP", "users": [{"user_id": "25", "untag": true}]}))
        );
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let http = MockHttp::new();
        http.respond_raw("");
        let tags = HttpTagRepository::new(http.api());

        tags.delete("17").await.unwrap();

        assert_eq!(http.calls()[0].method, "DELETE");
        assert_eq!(http.calls()[0].path, "/tags/17");
    }

    #[tokio::test]
    async fn test_list_tags() {
        let http = MockHttp::new();
        http.respond(json!({"type": "tag.list", "tags": [{"id": "1", "name": "VIP"}]}));
        let tags = HttpTagRepository::new(http.api());

        let list = tags.list().await.unwrap();
        assert_eq!(list.tags[0].name, "VIP");
    }
}
