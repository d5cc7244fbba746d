//! Application state for the terminal client.

use drop_four::{COLS, Disc, MoveOutcome, Outcome, SessionController, SessionPhase};
use tracing::debug;

/// Main application state.
pub struct App {
    session: SessionController,
    cursor: usize,
    status: String,
}

impl App {
    /// Creates the app around a session controller.
    pub fn new(session: SessionController) -> Self {
        Self {
            session,
            cursor: COLS / 2,
            status: "Connecting to server...".to_string(),
        }
    }

    /// Session controller backing the app.
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Column the drop cursor is on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Starts (or restarts) the session and refreshes the status line.
    pub async fn start(&mut self) {
        debug!("Starting session");
        self.status = "Connecting to server...".to_string();
        self.cursor = COLS / 2;
        match self.session.start_session().await {
            SessionPhase::Active => self.status = turn_message(self.session.to_move()),
            SessionPhase::Over(outcome) => self.status = outcome_message(outcome),
            SessionPhase::Loading => {}
        }
    }

    /// Moves the drop cursor one column left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the drop cursor one column right.
    pub fn cursor_right(&mut self) {
        if self.cursor + 1 < COLS {
            self.cursor += 1;
        }
    }

    /// Drops in the cursor column.
    pub async fn drop_at_cursor(&mut self) {
        self.drop_at(self.cursor).await;
    }

    /// Drops in the given column and refreshes the status line.
    pub async fn drop_at(&mut self, col: usize) {
        debug!(col, "Drop requested");
        match self.session.submit_move(col).await {
            MoveOutcome::Placed => self.status = turn_message(self.session.to_move()),
            MoveOutcome::Finished(outcome) => self.status = outcome_message(outcome),
            MoveOutcome::ColumnFull => {
                self.status = "That column is full. Try another.".to_string();
            }
            MoveOutcome::Rejected => self.status = "Invalid move. Try another.".to_string(),
            MoveOutcome::Ignored => {}
        }
    }
}

fn turn_message(disc: Disc) -> String {
    match disc {
        Disc::Yellow => "Your turn. Left/Right to aim, Enter to drop.".to_string(),
        Disc::Red => "Red is thinking...".to_string(),
    }
}

fn outcome_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(Disc::Yellow) => {
            "You win! Press 'r' for a new game or 'q' to quit.".to_string()
        }
        Outcome::Win(Disc::Red) => "Red wins! Press 'r' for a new game or 'q' to quit.".to_string(),
        Outcome::Draw => "It's a draw! Press 'r' for a new game or 'q' to quit.".to_string(),
        Outcome::ConnectionLost => {
            "Cannot reach the server. Press 'r' to retry or 'q' to quit.".to_string()
        }
    }
}
