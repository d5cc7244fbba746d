//! Terminal UI for drop_four.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

use drop_four::{ApiClient, SessionController};

use app::App;
use input::Action;

/// Runs the interactive terminal client against the given API base URL.
pub async fn run_tui(api_url: String) -> Result<()> {
    // Log to a file so tracing output cannot corrupt the alternate screen.
    let log_file = std::fs::File::create("drop_four_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(api_url = %api_url, "Starting drop_four TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let session = SessionController::new(Box::new(ApiClient::new(api_url)));
    let mut app = App::new(session);

    let res = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// Draw, poll for one key, apply it.
///
/// Backend calls are awaited inline, so at most one session-mutating request
/// is ever outstanding.
async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    // Show the loading screen before the first round trip completes.
    terminal.draw(|f| ui::draw(f, app))?;
    app.start().await;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match input::action_for(key.code) {
                    Action::Quit => {
                        info!("User quit");
                        return Ok(());
                    }
                    Action::Restart => app.start().await,
                    Action::CursorLeft => app.cursor_left(),
                    Action::CursorRight => app.cursor_right(),
                    Action::Drop(col) => app.drop_at(col).await,
                    Action::DropAtCursor => app.drop_at_cursor().await,
                    Action::None => {}
                }
            }
        }
    }
}
