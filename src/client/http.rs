//! JSON REST implementation of `ApiClient`
//!
//! Wire conventions:
//! - `GET {base}/{resource}` with `page[limit]`/`page[offset]`,
//!   `filter[<field>]` and `include` query parameters
//! - `POST {base}/{resource}` to create
//! - `PATCH {base}/{resource}/{id}` with only the modified fields
//! - `DELETE {base}/{resource}/{id}`
//!
//! All bodies are JSON. Non-success statuses are turned into
//! `ClientError::Response` carrying the server's message text.

use super::{ApiClient, ResourcePage};
use crate::error::ClientError;
use crate::query::Query;
use crate::record::FieldMap;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// `ApiClient` backed by `reqwest` against a single API base URL
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Build on top of a preconfigured `reqwest::Client` (auth headers,
    /// proxies, timeouts)
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    fn record_url(&self, resource: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, resource, id)
    }

    async fn read_body<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Response {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get_many(&self, resource: &str, query: &Query) -> Result<ResourcePage, ClientError> {
        let url = self.collection_url(resource);
        tracing::debug!(%url, "fetching resource page");

        let response = self
            .http
            .get(&url)
            .query(&query.to_params())
            .send()
            .await?;
        Self::read_body(response).await
    }

    async fn create(&self, resource: &str, fields: &FieldMap) -> Result<Value, ClientError> {
        let url = self.collection_url(resource);
        tracing::debug!(%url, "creating record");

        let response = self.http.post(&url).json(fields).send().await?;
        Self::read_body(response).await
    }

    async fn update(
        &self,
        resource: &str,
        id: &str,
        fields: &FieldMap,
    ) -> Result<Value, ClientError> {
        let url = self.record_url(resource, id);
        tracing::debug!(%url, fields = fields.len(), "updating record");

        let response = self.http.patch(&url).json(fields).send().await?;
        Self::read_body(response).await
    }

    async fn delete(&self, resource: &str, id: &str) -> Result<Value, ClientError> {
        let url = self.record_url(resource, id);
        tracing::debug!(%url, "deleting record");

        let response = self.http.delete(&url).send().await?;
        Self::read_body(response).await
    }
}
