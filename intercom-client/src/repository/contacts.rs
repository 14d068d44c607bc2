//! Contacts repository
//!
//! Contacts (leads) live under `/contacts`. They are looked up by id or
//! user_id only; an email can match several contacts, so it goes through
//! [`ContactRepository::list_by_email`] instead.

use async_trait::async_trait;
use intercom_core::domain::contact::{Contact, ContactList, ContactListParams};
use intercom_core::domain::user::User;
use intercom_core::dto::params::scroll_query;
use intercom_core::dto::person::ConvertRequest;
use intercom_core::{ToQuery, UserIdentifiers, decode_conversion};

use crate::api::{Api, member_path};
use crate::error::Result;
use crate::pager::ScrollSource;

/// Repository trait for contact operations
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Find a single contact by id, or by user_id when no id is set
    async fn find(&self, identifiers: &UserIdentifiers) -> Result<Contact>;

    /// Fetch one page of contacts
    async fn list(&self, params: &ContactListParams) -> Result<ContactList>;

    /// Fetch every contact with the given email address (first page)
    async fn list_by_email(&self, email: &str) -> Result<ContactList>;

    /// Fetch one scroll step; an empty cursor starts a new session
    async fn scroll(&self, cursor: &str) -> Result<ContactList>;

    async fn create(&self, contact: &Contact) -> Result<Contact>;

    async fn update(&self, contact: &Contact) -> Result<Contact>;

    /// Convert a contact into a user
    ///
    /// `user` only needs its identifying fields. If it matches an existing
    /// user the contact is merged into it; otherwise the contact becomes a
    /// new user.
    async fn convert(&self, contact: &Contact, user: &User) -> Result<User>;

    /// Delete a contact by Intercom id, returning its last representation
    async fn delete(&self, id: &str) -> Result<Contact>;
}

/// HTTP implementation of ContactRepository
#[derive(Clone)]
pub struct HttpContactRepository {
    api: Api,
}

impl HttpContactRepository {
    pub(crate) fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ContactRepository for HttpContactRepository {
    async fn find(&self, identifiers: &UserIdentifiers) -> Result<Contact> {
        let route = identifiers.contact_route()?;
        self.api.find(route).await
    }

    async fn list(&self, params: &ContactListParams) -> Result<ContactList> {
        self.api.get("/contacts", &params.to_query()).await
    }

    async fn list_by_email(&self, email: &str) -> Result<ContactList> {
        let params = ContactListParams {
            email: Some(email.to_string()),
            ..Default::default()
        };
        self.list(&params).await
    }

    async fn scroll(&self, cursor: &str) -> Result<ContactList> {
        self.api.get("/contacts/scroll", &scroll_query(cursor)).await
    }

    async fn create(&self, contact: &Contact) -> Result<Contact> {
        self.api.save("/contacts", contact).await
    }

    async fn update(&self, contact: &Contact) -> Result<Contact> {
        self.api.save("/contacts", contact).await
    }

    async fn convert(&self, contact: &Contact, user: &User) -> Result<User> {
        let request = ConvertRequest::new(contact, user);
        let bytes = self.api.post_raw("/contacts/convert", &request).await?;
        Ok(decode_conversion(&bytes)?)
    }

    async fn delete(&self, id: &str) -> Result<Contact> {
        let path = member_path("contacts", "contact", id)?;
        self.api
            .delete(&path, || Contact {
                id: id.to_string(),
                ..Default::default()
            })
            .await
    }
}

#[async_trait]
impl ScrollSource for HttpContactRepository {
    type Page = ContactList;

    async fn fetch_page(&self, cursor: &str) -> Result<ContactList> {
        self.scroll(cursor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::testing::MockHttp;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_email_alone_does_not_identify_a_contact() {
        let http = MockHttp::new();
        let contacts = HttpContactRepository::new(http.api());

        let err = contacts
            .find(&UserIdentifiers::by_email("lead@b.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::MissingIdentifier {
                resource: "contact"
            }
        ));
        assert!(http.calls().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_user_id_filters_collection() {
        let http = MockHttp::new();
        http.respond(json!({"type": "contact", "id": "c1", "user_id": "abc-123"}));
        let contacts = HttpContactRepository::new(http.api());

        let contact = contacts
            .find(&UserIdentifiers::by_user_id("abc-123"))
            .await
            .unwrap();

        assert_eq!(contact.id, "c1");
        let calls = http.calls();
        assert_eq!(calls[0].path, "/contacts");
        assert_eq!(calls[0].query, vec![("user_id", "abc-123".to_string())]);
    }

    #[tokio::test]
    async fn test_list_by_email() {
        let http = MockHttp::new();
        http.respond(json!({
            "type": "contact.list",
            "contacts": [{"id": "c1", "email": "lead@b.com"}]
        }));
        let contacts = HttpContactRepository::new(http.api());

        let list = contacts.list_by_email("lead@b.com").await.unwrap();

        assert_eq!(list.contacts.len(), 1);
        assert_eq!(
            http.calls()[0].query,
            vec![("email", "lead@b.com".to_string())]
        );
    }

    #[tokio::test]
    async fn test_create_and_update_post_to_collection() {
        let http = MockHttp::new();
        http.respond(json!({"type": "contact", "id": "c1", "name": "Lead"}));
        http.respond(json!({"type": "contact", "id": "c1", "name": "Renamed"}));
        let contacts = HttpContactRepository::new(http.api());

        let created = contacts
            .create(&Contact {
                name: "Lead".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let updated = contacts
            .update(&Contact {
                name: "Renamed".to_string(),
                ..created
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        let calls = http.calls();
        assert_eq!(calls[0].body, Some(json!({"name": "Lead"})));
        assert_eq!(calls[1].path, "/contacts");
        assert_eq!(calls[1].body, Some(json!({"id": "c1", "name": "Renamed"})));
    }

    #[tokio::test]
    async fn test_convert_merges_envelope() {
        let http = MockHttp::new();
        http.respond(json!({
            "user": {"type": "user", "id": 99, "email": "lead@b.com"},
            "contact": {"type": "contact", "id": "c1", "name": "Lead", "phone": "555"}
        }));
        let contacts = HttpContactRepository::new(http.api());

        let contact = Contact {
            id: "c1".to_string(),
            ..Default::default()
        };
        let user = User {
            email: "lead@b.com".to_string(),
            ..Default::default()
        };
        let converted = contacts.convert(&contact, &user).await.unwrap();

        assert_eq!(converted.id, "99");
        assert_eq!(converted.email, "lead@b.com");
        assert_eq!(converted.name, "Lead");
        assert_eq!(converted.phone, "555");

        let calls = http.calls();
        assert_eq!(calls[0].path, "/contacts/convert");
        assert_eq!(
            calls[0].body,
            Some(json!({"contact": {"id": "c1"}, "user": {"email": "lead@b.com"}}))
        );
    }

    #[tokio::test]
    async fn test_delete_requires_id() {
        let http = MockHttp::new();
        let contacts = HttpContactRepository::new(http.api());

        assert!(contacts.delete("").await.is_err());
        assert!(http.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_with_empty_body_succeeds() {
        let http = MockHttp::new();
        http.respond_raw("");
        let contacts = HttpContactRepository::new(http.api());

        let deleted = contacts.delete("c1").await.unwrap();

        assert_eq!(deleted.id, "c1");
        assert_eq!(http.calls()[0].path, "/contacts/c1");
    }

    #[tokio::test]
    async fn test_scroll_uses_scroll_endpoint() {
        let http = MockHttp::new();
        http.respond(json!({"contacts": [{"id": "c1"}], "scroll_param": "s1"}));
        let contacts = HttpContactRepository::new(http.api());

        let page = contacts.scroll("").await.unwrap();

        assert_eq!(page.scroll_param, "s1");
        assert_eq!(http.calls()[0].path, "/contacts/scroll");
    }
}
