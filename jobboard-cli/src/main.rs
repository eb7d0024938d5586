//! Jobboard CLI - replay drag and store scripts against a job-application kanban board.
//!
//! Commands:
//! - `jobboard replay <script>`: Run a script and print the final board
//! - `jobboard categories`: Show the configured categories
//!
//! Environment variables:
//! - JOBBOARD_CATEGORIES: Override the category list (comma-separated, e.g. Wishlist,Applied,Offer)
//! - JOBBOARD_FILTER_FIELD: Card field filters match against
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobboard::{categories, replay};
use jobboard::{Cli, Commands};
use jobboard_kanban::BoardConfig;

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        BoardConfig::load(cli.config.as_deref()).context("failed to load board configuration")?;

    match cli.command {
        Commands::Replay { script, json } => replay::run_replay(&script, &config, json).await,
        Commands::Categories { json } => categories::run_categories(&config, json),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("jobboard=debug,jobboard_kanban=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
