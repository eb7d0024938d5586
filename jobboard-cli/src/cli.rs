//! CLI definition for the jobboard command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Jobboard - replay drag and store scripts against a job-application kanban board.
///
/// The board's categories come from built-in defaults, an optional YAML file
/// given with --config, and JOBBOARD_* environment variables, in that order.
#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(version)]
#[command(about = "Replay drag and store scripts against a job-application kanban board")]
#[command(
    long_about = "Jobboard builds a kanban board of job applications and replays a script \
    of drag events, store commands and filter changes against it.\n\n\
    Environment variables:\n  \
    JOBBOARD_CATEGORIES    Override the category list, comma-separated (Wishlist,Applied,Offer)\n  \
    JOBBOARD_FILTER_FIELD  Card field filters match against (company or position)\n  \
    RUST_LOG               Log filter when --debug is not set"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Board configuration file (YAML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a script and print the resulting board
    Replay {
        /// Script file (YAML) with initial cards and steps
        script: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configured categories in column order
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
