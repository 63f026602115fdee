//! Command-line interface for bulls_cows.

use bulls_cows::Difficulty;
use clap::{Args, Parser, Subcommand};

/// Bulls & Cows - terminal client for a remote game service
#[derive(Parser, Debug)]
#[command(name = "bulls_cows")]
#[command(about = "Play Bulls & Cows against a remote game service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "bulls_cows.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every front end
#[derive(Args, Debug, Clone)]
pub struct ConnectArgs {
    /// Game service base URL (overrides config and BULLS_COWS_API_BASE)
    #[arg(long)]
    pub server_url: Option<String>,

    /// Difficulty to preselect: easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI client
    Tui(ConnectArgs),

    /// Play line by line on stdin/stdout
    Play(ConnectArgs),
}
