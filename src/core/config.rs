//! Publish configuration and payload resolution

use crate::core::error::ConfigError;
use std::path::PathBuf;
use tracing::debug;

/// The options recognized by the publish workflow.
///
/// An explicit struct rather than a loose option bag: every field has a
/// type and a default, and validation happens before any request is made.
#[derive(Debug, Clone, Default)]
pub struct PublishConfig {
    /// Full API endpoint URL to POST to
    pub api_url: String,

    /// Path to a file containing the json payload
    pub json_file: Option<PathBuf>,

    /// Inline json payload string
    pub json_string: Option<String>,

    /// Go through validation and logging but skip the network call
    pub dry_run: bool,
}

impl PublishConfig {
    #[allow(dead_code)]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    #[allow(dead_code)]
    pub fn with_json_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_file = Some(path.into());
        self
    }

    #[allow(dead_code)]
    pub fn with_json_string(mut self, json: impl Into<String>) -> Self {
        self.json_string = Some(json.into());
        self
    }

    #[allow(dead_code)]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check that a target endpoint was supplied
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.is_empty() {
            return Err(ConfigError::MissingApiUrl);
        }
        Ok(())
    }

    /// Materialize the payload text.
    ///
    /// A `json_file` takes precedence over an inline `json_string`. The
    /// contents are treated as opaque text and returned verbatim; no json
    /// well-formedness check is performed.
    pub fn resolve_payload(&self) -> Result<String, ConfigError> {
        if let Some(path) = &self.json_file {
            debug!("retrieving json from file: [{}]", path.display());
            let payload = std::fs::read_to_string(path)
                .map_err(|source| ConfigError::unreadable_file(path.clone(), source))?;
            debug!("retrieved {} bytes of json", payload.len());
            return Ok(payload);
        }

        debug!("json_file not specified, trying json_string...");
        match &self.json_string {
            Some(json) if !json.is_empty() => Ok(json.clone()),
            _ => Err(ConfigError::NoPayload),
        }
    }
}
