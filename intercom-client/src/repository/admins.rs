//! Admins repository

use async_trait::async_trait;
use intercom_core::Query;
use intercom_core::domain::admin::AdminList;

use crate::api::Api;
use crate::error::Result;

/// Repository trait for admin operations
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Fetch every admin and team of the workspace
    async fn list(&self) -> Result<AdminList>;
}

/// HTTP implementation of AdminRepository
#[derive(Clone)]
pub struct HttpAdminRepository {
    api: Api,
}

impl HttpAdminRepository {
    pub(crate) fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AdminRepository for HttpAdminRepository {
    async fn list(&self) -> Result<AdminList> {
        self.api.get("/admins", &Query::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockHttp;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_admins() {
        let http = MockHttp::new();
        http.respond(json!({
            "type": "admin.list",
            "admins": [
                {"type": "admin", "id": 1, "name": "Ada", "email": "ada@b.com"},
                {"type": "team", "id": "2", "name": "Support"}
            ]
        }));
        let admins = HttpAdminRepository::new(http.api());

        let list = admins.list().await.unwrap();

        assert_eq!(list.admins.len(), 2);
        assert_eq!(list.admins[0].id, "1");
        assert_eq!(list.admins[1].kind, "team");
        assert_eq!(http.calls()[0].path, "/admins");
    }
}
