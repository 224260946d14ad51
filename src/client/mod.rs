//! Injected HTTP client abstraction
//!
//! Controllers never talk to the network directly; they receive a
//! `&dyn ApiClient` per call. The trait exposes the uniform per-resource
//! surface every list/form controller needs: `get_many`, `create`,
//! `update`, `delete`. The concrete `HttpApiClient` speaks JSON REST;
//! tests inject a recording mock instead.
//!
//! A process-wide default instance can be registered once for ergonomic
//! call sites. That is an explicit opt-in adapter, not required wiring -
//! reading it before it is set is a configuration error.

mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use http::HttpApiClient;

use crate::error::ClientError;
use crate::query::Query;
use crate::record::{FieldMap, Record};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

/// Collection metadata returned alongside a page of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    pub total: u64,
}

/// One page of raw records as returned by a list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePage {
    pub data: Vec<Value>,
    pub meta: PageMeta,
}

impl ResourcePage {
    /// Decode the raw page into typed records plus the server total
    pub fn decode<T: Record>(self) -> Result<(Vec<T>, u64), ClientError> {
        let total = self.meta.total;
        let items = self
            .data
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        Ok((items, total))
    }
}

/// Per-resource CRUD surface of the identity/access management API
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetch a page of records matching `query`
    async fn get_many(&self, resource: &str, query: &Query) -> Result<ResourcePage, ClientError>;

    /// Create a record from a field payload, returning the stored record
    async fn create(&self, resource: &str, fields: &FieldMap) -> Result<Value, ClientError>;

    /// Partially update a record, returning the stored record
    async fn update(&self, resource: &str, id: &str, fields: &FieldMap)
        -> Result<Value, ClientError>;

    /// Delete a record, returning whatever the server echoes back
    async fn delete(&self, resource: &str, id: &str) -> Result<Value, ClientError>;
}

static DEFAULT_CLIENT: OnceLock<Arc<dyn ApiClient>> = OnceLock::new();

/// Register the process-wide default client. Only the first call wins;
/// returns whether this call installed the instance.
pub fn set_default_client(client: Arc<dyn ApiClient>) -> bool {
    DEFAULT_CLIENT.set(client).is_ok()
}

/// The default client, if one was registered
pub fn try_default_client() -> Result<Arc<dyn ApiClient>, ClientError> {
    DEFAULT_CLIENT
        .get()
        .cloned()
        .ok_or(ClientError::DefaultClientUnset)
}

/// The default client.
///
/// # Panics
///
/// Panics when no client was registered via `set_default_client` - using
/// the default instance before configuring it is a fatal setup error.
/// Call sites that prefer a recoverable path use `try_default_client`.
pub fn default_client() -> Arc<dyn ApiClient> {
    match try_default_client() {
        Ok(client) => client,
        Err(_) => panic!("access-kit: set_default_client must be called before default_client"),
    }
}
