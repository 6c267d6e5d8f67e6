mod cli;
mod core;
mod publish;
mod transport;

use crate::cli::output::{style, CHECK, CROSS, INFO, ROCKET};
use crate::cli::Cli;
use crate::publish::Publisher;
use crate::transport::HttpTransport;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    debug!("jpost version [{}] starting...", env!("CARGO_PKG_VERSION"));

    let config = cli.to_config();

    let mut publisher = Publisher::new(HttpTransport::new());
    if let Err(e) = publisher.configure(&config) {
        // Configuration errors get the usage help; publish errors do not.
        Cli::command().print_help().ok();
        eprintln!();
        eprintln!("{} {}", CROSS, style(format!("ERROR: {}", e)).red());
        std::process::exit(1);
    }

    println!(
        "{} Posting json to {}",
        ROCKET,
        style(&config.api_url).bold()
    );

    match publisher.publish().await {
        Ok(outcome) => {
            if outcome.dry_run {
                println!("{} Dry run - nothing was posted", INFO);
            } else {
                if let Some(body) = &outcome.response_body {
                    debug!("server response: [{}]", body);
                }
                println!(
                    "{} Posting json data to server {}",
                    CHECK,
                    style("OK").green()
                );
            }
        }
        Err(e) => {
            error!("{}", e);
            println!("{} Posting json {}", CROSS, style("failed").red());
            std::process::exit(1);
        }
    }

    Ok(())
}
