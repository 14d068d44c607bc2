//! Recording [`HttpClient`] for unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use intercom_core::Query;
use serde_json::Value;

use crate::api::Api;
use crate::error::TransportError;
use crate::transport::HttpClient;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

/// Plays back canned responses in order and records every request
#[derive(Default)]
pub(crate) struct MockHttp {
    responses: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockHttp {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.to_string().into_bytes()));
    }

    pub fn respond_raw(&self, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.as_bytes().to_vec()));
    }

    pub fn fail(&self, status: u16, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::api_error(status, message)));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn api(self: &Arc<Self>) -> Api {
        Api::new(self.clone())
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        query: Option<&Query>,
        body: Option<&Value>,
    ) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            query: query.map(|q| q.pairs().to_vec()).unwrap_or_default(),
            body: body.cloned(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::api_error(599, "no canned response")))
    }
}

#[async_trait]
impl HttpClient for MockHttp {
    async fn get(&self, path: &str, query: &Query) -> Result<Vec<u8>, TransportError> {
        self.record("GET", path, Some(query), None)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Vec<u8>, TransportError> {
        self.record("POST", path, None, Some(body))
    }

    async fn delete(&self, path: &str, body: Option<&Value>) -> Result<Vec<u8>, TransportError> {
        self.record("DELETE", path, None, body)
    }
}
