//! HTTP transport for submitting payloads

pub mod http;

use crate::core::PublishError;
use async_trait::async_trait;

pub use http::HttpTransport;

/// Trait for the outbound HTTP exchange - allows for different implementations
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with `Content-Type: application/json` and
    /// report whatever the server answered
    async fn post_json(&self, url: &str, body: &str) -> Result<TransportResponse, PublishError>;
}

/// What came back over the wire
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Numeric HTTP status code
    pub status: u16,

    /// Status line for error reporting, e.g. "500 Internal Server Error"
    pub status_line: String,

    /// Response body text, empty if the server sent none
    pub body: String,
}

impl TransportResponse {
    /// Any 2xx-class response counts as success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
