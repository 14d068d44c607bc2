//! Request plumbing shared by every repository
//!
//! Wraps the injected [`HttpClient`]: serializes payloads, picks the request
//! for a resolved [`Route`] and decodes the response into a domain value.

use std::sync::Arc;

use intercom_core::identifiers;
use intercom_core::{FromWire, Query, Route, ToWire, decode};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::transport::HttpClient;

#[derive(Clone)]
pub(crate) struct Api {
    http: Arc<dyn HttpClient>,
}

impl Api {
    pub(crate) fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// `GET` and decode
    pub(crate) async fn get<T: FromWire>(&self, path: &str, query: &Query) -> Result<T> {
        let bytes = self.http.get(path, query).await?;
        Ok(decode(&bytes)?)
    }

    /// Fetch the entity a lookup route points at
    pub(crate) async fn find<T: FromWire>(&self, route: Route) -> Result<T> {
        match route {
            Route::Path(path) => self.get(&path, &Query::new()).await,
            Route::Filter { path, query } => self.get(&path, &query).await,
        }
    }

    /// `POST` an entity's sparse payload and decode the saved entity
    pub(crate) async fn save<E, T>(&self, path: &str, entity: &E) -> Result<T>
    where
        E: ToWire + ?Sized,
        T: FromWire,
    {
        let bytes = self.post_raw(path, &entity.to_wire()).await?;
        Ok(decode(&bytes)?)
    }

    /// `POST` any payload and return the raw body
    pub(crate) async fn post_raw<P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<Vec<u8>> {
        let body = to_body(payload)?;
        Ok(self.http.post(path, &body).await?)
    }

    /// `DELETE` and decode the deleted entity
    ///
    /// An empty body is not an error: `placeholder` stands in for the entity.
    pub(crate) async fn delete<T, F>(&self, path: &str, placeholder: F) -> Result<T>
    where
        T: FromWire,
        F: FnOnce() -> T,
    {
        let bytes = self.http.delete(path, None).await?;
        if bytes.trim_ascii().is_empty() {
            return Ok(placeholder());
        }
        Ok(decode(&bytes)?)
    }

    /// `DELETE`, ignoring whatever body comes back
    pub(crate) async fn delete_discarding(&self, path: &str) -> Result<()> {
        self.http.delete(path, None).await?;
        Ok(())
    }
}

/// `/{collection}/{id}`, refusing an empty id before anything is sent
pub(crate) fn member_path(collection: &str, resource: &'static str, id: &str) -> Result<String> {
    if id.is_empty() {
        return Err(ClientError::MissingIdentifier { resource });
    }
    Ok(identifiers::member_path(collection, id))
}

fn to_body<P: Serialize + ?Sized>(payload: &P) -> Result<Value> {
    serde_json::to_value(payload).map_err(ClientError::Encode)
}
