//! Drop Four - terminal client for a remote Connect Four service.
//!
//! All game rules live in the backend; this binary only renders state and
//! relays moves.

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use drop_four::ApiClient;
use tracing_subscriber::EnvFilter;

/// Default backend base URL, matching the development server.
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { api_url } => tui::run_tui(resolve_api_url(api_url)).await,
        Command::State { game_id, api_url } => run_state(resolve_api_url(api_url), game_id).await,
        Command::Info { api_url } => run_info(resolve_api_url(api_url)).await,
    }
}

/// Resolution order: flag, then environment, then the development default.
fn resolve_api_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("DROP_FOUR_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Fetch one session snapshot and print it.
async fn run_state(api_url: String, game_id: String) -> Result<()> {
    init_tracing();

    let client = ApiClient::new(api_url);
    let response = client.state(&game_id).await?;

    println!("{}", response.state.decode_grid()?.display());
    if let Some(winner) = response.winner()? {
        println!("Winner: {}", winner);
    } else if response.is_draw {
        println!("Draw");
    } else {
        println!("To move: {}", response.state.decode_turn()?);
    }

    Ok(())
}

/// Print backend build metadata.
async fn run_info(api_url: String) -> Result<()> {
    init_tracing();

    let client = ApiClient::new(api_url);
    let info = client.info().await?;

    println!("Backend version: {}", info.version);
    if info.center_opening {
        println!("Center opening: enabled");
    }

    Ok(())
}

/// Stderr tracing for the one-shot commands; the TUI sets up its own
/// file-backed subscriber.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
