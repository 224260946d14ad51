//! Error types for client operations
//!
//! Validation failures are values (see `validation`), never errors; this
//! module only covers the network/decoding side. Controller methods catch
//! these at the call site and surface them as events or return values.

use thiserror::Error;

/// Errors produced by `ApiClient` implementations and response decoding
#[derive(Debug, Error)]
pub enum ClientError {
    /// The process-wide default client was read before being set.
    /// This is a configuration error: call `set_default_client` first.
    #[error("default API client is not set")]
    DefaultClientUnset,

    /// Transport-level failure (connection, TLS, malformed response body)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected response status {status}: {message}")]
    Response { status: u16, message: String },

    /// The response body did not decode into the expected record shape
    #[error("failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),
}
