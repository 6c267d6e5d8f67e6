//! reqwest-backed transport

use crate::core::PublishError;
use crate::transport::{Transport, TransportResponse};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// Transport that performs the POST with a shared [`reqwest::Client`].
///
/// No timeout is configured; `reqwest` applies no overall request timeout
/// by default, so the request blocks until the server answers or the
/// connection fails.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<TransportResponse, PublishError> {
        // The payload goes out verbatim as the request body; .json() would
        // re-serialize it.
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| PublishError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let status_line = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        debug!("reading response...");

        let body = response.text().await.map_err(|e| PublishError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_line,
            body,
        })
    }
}
