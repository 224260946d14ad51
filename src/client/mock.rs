//! Call-recording `ApiClient` used by controller tests
//!
//! Responses are queued up front; every invocation is recorded so tests
//! can assert exactly which requests were (or were not) made.

use super::{ApiClient, PageMeta, ResourcePage};
use crate::error::ClientError;
use crate::query::Query;
use crate::record::FieldMap;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A single recorded client invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetMany {
        resource: String,
        query: Query,
    },
    Create {
        resource: String,
        fields: FieldMap,
    },
    Update {
        resource: String,
        id: String,
        fields: FieldMap,
    },
    Delete {
        resource: String,
        id: String,
    },
}

#[derive(Debug, Default)]
pub struct MockClient {
    pages: Mutex<VecDeque<ResourcePage>>,
    records: Mutex<VecDeque<Value>>,
    fail: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a page response for the next `get_many`
    pub fn with_page(self, data: Vec<Value>, total: u64) -> Self {
        self.pages.lock().unwrap().push_back(ResourcePage {
            data,
            meta: PageMeta { total },
        });
        self
    }

    /// Queue a record response for the next `create`/`update`/`delete`
    pub fn with_record(self, record: Value) -> Self {
        self.records.lock().unwrap().push_back(record);
        self
    }

    /// Make every call fail with a server error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(ClientError::Response {
                status: 500,
                message: "mock failure".to_string(),
            });
        }
        Ok(())
    }

    /// Next queued record, falling back to echoing the payload
    fn next_record(&self, fallback: Value) -> Value {
        self.records
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(fallback)
    }
}

#[async_trait]
impl ApiClient for MockClient {
    async fn get_many(&self, resource: &str, query: &Query) -> Result<ResourcePage, ClientError> {
        self.record_call(Call::GetMany {
            resource: resource.to_string(),
            query: query.clone(),
        })?;
        Ok(self
            .pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ResourcePage {
                data: Vec::new(),
                meta: PageMeta { total: 0 },
            }))
    }

    async fn create(&self, resource: &str, fields: &FieldMap) -> Result<Value, ClientError> {
        self.record_call(Call::Create {
            resource: resource.to_string(),
            fields: fields.clone(),
        })?;
        let mut echoed = fields.clone();
        echoed
            .entry("id".to_string())
            .or_insert_with(|| Value::String("generated".to_string()));
        Ok(self.next_record(Value::Object(echoed)))
    }

    async fn update(
        &self,
        resource: &str,
        id: &str,
        fields: &FieldMap,
    ) -> Result<Value, ClientError> {
        self.record_call(Call::Update {
            resource: resource.to_string(),
            id: id.to_string(),
            fields: fields.clone(),
        })?;
        let mut echoed = fields.clone();
        echoed.insert("id".to_string(), Value::String(id.to_string()));
        Ok(self.next_record(Value::Object(echoed)))
    }

    async fn delete(&self, resource: &str, id: &str) -> Result<Value, ClientError> {
        self.record_call(Call::Delete {
            resource: resource.to_string(),
            id: id.to_string(),
        })?;
        Ok(self.next_record(Value::Null))
    }
}
