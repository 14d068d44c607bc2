//! Companies repository

use async_trait::async_trait;
use intercom_core::domain::company::{Company, CompanyList, CompanyListParams};
use intercom_core::dto::params::scroll_query;
use intercom_core::{CompanyIdentifiers, ToQuery};

use crate::api::Api;
use crate::error::Result;
use crate::pager::ScrollSource;

/// Repository trait for company operations
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Find a single company by id, or by company_id or name
    async fn find(&self, identifiers: &CompanyIdentifiers) -> Result<Company>;

    /// Fetch one page of companies
    async fn list(&self, params: &CompanyListParams) -> Result<CompanyList>;

    /// Fetch one scroll step; an empty cursor starts a new session
    async fn scroll(&self, cursor: &str) -> Result<CompanyList>;

    /// Create or update a company from its set fields
    async fn save(&self, company: &Company) -> Result<Company>;
}

/// HTTP implementation of CompanyRepository
#[derive(Clone)]
pub struct HttpCompanyRepository {
    api: Api,
}

impl HttpCompanyRepository {
    pub(crate) fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CompanyRepository for HttpCompanyRepository {
    async fn find(&self, identifiers: &CompanyIdentifiers) -> Result<Company> {
        let route = identifiers.route()?;
        self.api.find(route).await
    }

    async fn list(&self, params: &CompanyListParams) -> Result<CompanyList> {
        self.api.get("/companies", &params.to_query()).await
    }

    async fn scroll(&self, cursor: &str) -> Result<CompanyList> {
        self.api.get("/companies/scroll", &scroll_query(cursor)).await
    }

    async fn save(&self, company: &Company) -> Result<Company> {
        self.api.save("/companies", company).await
    }
}

#[async_trait]
impl ScrollSource for HttpCompanyRepository {
    type Page = CompanyList;

    async fn fetch_page(&self, cursor: &str) -> Result<CompanyList> {
        self.scroll(cursor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::testing::MockHttp;
    use intercom_core::domain::company::Plan;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_by_name_filters_collection() {
        let http = MockHttp::new();
        http.respond(json!({"type": "company", "id": "5", "name": "Acme"}));
        let companies = HttpCompanyRepository::new(http.api());

        let company = companies
            .find(&CompanyIdentifiers::by_name("Acme"))
            .await
            .unwrap();

        assert_eq!(company.name, "Acme");
        let calls = http.calls();
        assert_eq!(calls[0].path, "/companies");
        assert_eq!(calls[0].query, vec![("name", "Acme".to_string())]);
    }

    #[tokio::test]
    async fn test_find_by_id_ignores_other_keys() {
        let http = MockHttp::new();
        http.respond(json!({"type": "company", "id": 5}));
        let companies = HttpCompanyRepository::new(http.api());

        let identifiers = CompanyIdentifiers {
            id: Some("5".to_string()),
            company_id: Some("acme-1".to_string()),
            name: None,
        };
        companies.find(&identifiers).await.unwrap();

        assert_eq!(http.calls()[0].path, "/companies/5");
    }

    #[tokio::test]
    async fn test_find_without_identifiers_sends_nothing() {
        let http = MockHttp::new();
        let companies = HttpCompanyRepository::new(http.api());

        let err = companies
            .find(&CompanyIdentifiers::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::MissingIdentifier {
                resource: "company"
            }
        ));
        assert!(http.calls().is_empty());
    }

    #[tokio::test]
    async fn test_save_sends_explicit_zero() {
        let http = MockHttp::new();
        http.respond(json!({"type": "company", "id": "5", "company_id": "acme-1"}));
        let companies = HttpCompanyRepository::new(http.api());

        let company = Company {
            company_id: "acme-1".to_string(),
            monthly_spend: Some(0),
            plan: Some(Plan {
                name: "pro".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        companies.save(&company).await.unwrap();

        assert_eq!(
            http.calls()[0].body,
            Some(json!({"company_id": "acme-1", "monthly_spend": 0, "plan": "pro"}))
        );
    }

    #[tokio::test]
    async fn test_scroll_decodes_page() {
        let http = MockHttp::new();
        http.respond(json!({
            "type": "company.list",
            "companies": [{"id": "5"}, {"id": 6}],
            "scroll_param": "next"
        }));
        let companies = HttpCompanyRepository::new(http.api());

        let page = companies.scroll("").await.unwrap();

        assert_eq!(page.companies.len(), 2);
        assert_eq!(page.scroll_param, "next");
        assert_eq!(http.calls()[0].path, "/companies/scroll");
    }
}
