//! Command-line interface

pub mod output;

use crate::core::PublishConfig;
use clap::Parser;
use std::path::PathBuf;

/// Post a json payload to an HTTP API endpoint
#[derive(Debug, Parser, Clone)]
#[command(name = "jpost")]
#[command(version = "0.1.0")]
#[command(about = "Post a json payload to an HTTP API endpoint", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Full API url, example: -u http://host.example.com/api/v1.0/vote
    #[arg(short = 'u', long = "api_url")]
    pub api_url: Option<String>,

    /// File containing the json payload, example: -f ./sample.json
    #[arg(short = 'f', long = "json_file")]
    pub json_file: Option<PathBuf>,

    /// Inline json payload, enclosed in single quotes,
    /// example: -s '{"user_id":"sample@sample.com"}'
    #[arg(short = 's', long = "json_string")]
    pub json_string: Option<String>,

    /// Go through the motions but do not post anything to the server
    #[arg(long = "dry_run")]
    pub dry_run: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    #[allow(dead_code)]
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Build the workflow configuration from the parsed flags.
    ///
    /// A missing `--api_url` becomes an empty string here so the workflow
    /// validation reports it, matching the rest of the error surface.
    pub fn to_config(&self) -> PublishConfig {
        PublishConfig {
            api_url: self.api_url.clone().unwrap_or_default(),
            json_file: self.json_file.clone(),
            json_string: self.json_string.clone(),
            dry_run: self.dry_run,
        }
    }
}

use std::ffi::OsString;
