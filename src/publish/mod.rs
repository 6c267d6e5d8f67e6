//! The publish workflow: validate inputs, then POST the payload once

use crate::core::{ConfigError, PublishConfig, PublishError};
use crate::transport::Transport;
use tracing::{debug, info, warn};

/// Outcome of a successful publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// Response body returned by the server, `None` on a dry run
    pub response_body: Option<String>,

    /// Whether the network call was skipped
    pub dry_run: bool,
}

/// Workflow object holding the validated configuration for one submission.
///
/// Used by exactly one caller for one process invocation: `configure` once,
/// then `publish` once. Calling `publish` on an unconfigured publisher
/// fails fast with the empty-payload error.
pub struct Publisher<T: Transport> {
    transport: T,
    api_url: String,
    payload: String,
    dry_run: bool,
}

impl<T: Transport> Publisher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            api_url: String::new(),
            payload: String::new(),
            dry_run: false,
        }
    }

    /// Grab and validate all input params, materializing the json payload.
    pub fn configure(&mut self, config: &PublishConfig) -> Result<(), ConfigError> {
        debug!("configuring publisher...");
        self.dry_run = config.dry_run;

        config.validate()?;
        self.api_url = config.api_url.clone();
        debug!("api_url: [{}]", self.api_url);

        let payload = config.resolve_payload()?;
        if payload.is_empty() {
            return Err(ConfigError::EmptyPayload);
        }
        debug!("payload: [{}]", payload);
        self.payload = payload;
        Ok(())
    }

    /// Post the payload to the configured endpoint. One attempt, one
    /// outcome; nothing is retried.
    pub async fn publish(&self) -> Result<PublishOutcome, PublishError> {
        // Re-checked so a publisher that skipped configure fails fast
        // instead of sending an empty request.
        if self.payload.is_empty() {
            return Err(ConfigError::EmptyPayload.into());
        }
        if self.api_url.is_empty() {
            return Err(ConfigError::MissingApiUrl.into());
        }

        info!("posting json to [{}]", self.api_url);
        if self.dry_run {
            warn!("--dry_run set, will not attempt to POST");
            return Ok(PublishOutcome {
                response_body: None,
                dry_run: true,
            });
        }

        debug!("sending request...");
        let response = self.transport.post_json(&self.api_url, &self.payload).await?;

        if !response.is_success() {
            return Err(PublishError::Status {
                status: response.status_line,
                body: response.body,
            });
        }

        debug!("response: [{}]", response.body);
        info!("posting json data to server OK");
        Ok(PublishOutcome {
            response_body: Some(response.body),
            dry_run: false,
        })
    }
}
