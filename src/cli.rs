//! Command-line interface for drop_four.

use clap::{Parser, Subcommand};

/// Drop Four - terminal client for a remote Connect Four service
#[derive(Parser, Debug)]
#[command(name = "drop_four")]
#[command(about = "Terminal client for a remote Connect Four service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive terminal client
    Tui {
        /// Backend API base URL (falls back to DROP_FOUR_API_URL, then the
        /// local development default)
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Fetch and print the current state of a session
    State {
        /// Session identifier issued by the backend
        game_id: String,

        /// Backend API base URL
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Print backend build information
    Info {
        /// Backend API base URL
        #[arg(long)]
        api_url: Option<String>,
    },
}
