//! Core domain types for jpost
//!
//! This module defines the configuration and error types that the publish
//! workflow is built on.

pub mod config;
pub mod error;

pub use config::*;
pub use error::*;
