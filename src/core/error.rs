//! Error types for the publish workflow

use std::path::PathBuf;
use thiserror::Error;

/// Invalid or missing input. Terminal: surfaced with usage help and a
/// non-zero exit, nothing is retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("api_url not specified")]
    MissingApiUrl,

    #[error("json_file could not be read: [{}]: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("you must specify either json_file or json_string")]
    NoPayload,

    #[error("json payload is empty")]
    EmptyPayload,
}

impl ConfigError {
    pub fn unreadable_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::UnreadableFile {
            path: path.into(),
            source,
        }
    }
}

/// Failure during the HTTP exchange. Like `ConfigError`, terminal.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Preconditions re-checked at publish time failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request never completed (connection failure, read failure)
    #[error("request to [{url}] failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status
    #[error("server returned {status}: {body}")]
    Status { status: String, body: String },
}
