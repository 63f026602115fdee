//! Bulls & Cows - Unified CLI
//!
//! Terminal client for a remote Bulls & Cows game service.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use bulls_cows::{ClientConfig, RestGameClient, run_console, run_tui};
use clap::Parser;
use cli::{Cli, Command, ConnectArgs};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui(args) => {
            let config = load_config(&cli.config, args)?;
            run_tui(config).await
        }
        Command::Play(args) => {
            initialize_console_tracing();
            let config = load_config(&cli.config, args)?;
            run_play(config).await
        }
    }
}

/// Run the line-oriented client on stdin/stdout
#[instrument(skip(config), fields(api_base = %config.api_base()))]
async fn run_play(config: ClientConfig) -> Result<()> {
    info!("Starting console client");
    let client = RestGameClient::new(config.api_base().clone());
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_console(&client, *config.difficulty(), stdin, tokio::io::stdout()).await
}

fn load_config(path: &std::path::Path, args: ConnectArgs) -> Result<ClientConfig> {
    let config = ClientConfig::load(path)?.with_overrides(args.server_url, args.difficulty);
    Ok(config)
}

fn initialize_console_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
