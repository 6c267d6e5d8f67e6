//! jpost - post json payloads to an HTTP endpoint

pub mod cli;
pub mod core;
pub mod publish;
pub mod transport;

// Re-export commonly used types
pub use crate::core::{ConfigError, PublishConfig, PublishError};
pub use crate::publish::{PublishOutcome, Publisher};
pub use crate::transport::{HttpTransport, Transport, TransportResponse};
