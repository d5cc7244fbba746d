//! Client-side session state machine.
//!
//! The backend owns all game rules; the controller here only mirrors the
//! latest authoritative snapshot and tracks the session lifecycle:
//! Loading -> Active -> Active (per non-terminal move) -> Over. `Over` is
//! absorbing; the only way out is a fresh [`SessionController::start_session`],
//! which discards all prior state.

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::board::{COLS, Disc, Grid, GridError};
use crate::client::{ApiClient, ClientError};
use crate::protocol::GameResponse;

/// Opaque session identifier issued by the backend.
pub type GameId = String;

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The indicated disc connected four.
    Win(Disc),
    /// The board filled with no winner.
    Draw,
    /// The backend became unreachable or answered with garbage.
    ConnectionLost,
}

/// Lifecycle phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Session creation is in flight.
    Loading,
    /// The game is live and accepting moves.
    Active,
    /// Terminal state; input is suppressed until a fresh start.
    Over(Outcome),
}

/// What happened to a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was accepted and the game continues.
    Placed,
    /// The move was accepted and ended the game.
    Finished(Outcome),
    /// The chosen column has no open cell; nothing was sent.
    ColumnFull,
    /// The backend refused the move; local state is unchanged.
    Rejected,
    /// The session is not active or the column is out of range.
    Ignored,
}

/// Backend surface the session controller drives.
#[async_trait]
pub trait GameBackend: Send + Sync {
    /// Creates a new game session.
    async fn new_game(&self) -> Result<GameResponse, ClientError>;

    /// Plays a move in an existing session.
    async fn play(&self, game_id: &str, col: usize) -> Result<GameResponse, ClientError>;
}

#[async_trait]
impl GameBackend for ApiClient {
    async fn new_game(&self) -> Result<GameResponse, ClientError> {
        ApiClient::new_game(self).await
    }

    async fn play(&self, game_id: &str, col: usize) -> Result<GameResponse, ClientError> {
        ApiClient::play(self, game_id, col).await
    }
}

/// Client-side mirror of one game session.
pub struct SessionController {
    backend: Box<dyn GameBackend>,
    game_id: Option<GameId>,
    grid: Grid,
    to_move: Disc,
    phase: SessionPhase,
}

impl SessionController {
    /// Creates a controller over the given backend, starting in `Loading`.
    pub fn new(backend: Box<dyn GameBackend>) -> Self {
        Self {
            backend,
            game_id: None,
            grid: Grid::new(),
            to_move: Disc::Yellow,
            phase: SessionPhase::Loading,
        }
    }

    /// Current grid snapshot.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Disc whose turn the latest response indicated.
    pub fn to_move(&self) -> Disc {
        self.to_move
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Identifier of the current session, once one was created.
    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    /// Starts a fresh session, discarding any prior state.
    ///
    /// Any failure here is terminal: transport errors, non-success statuses,
    /// and undecodable payloads all leave the session in
    /// `Over(ConnectionLost)` until the next start.
    #[instrument(skip(self))]
    pub async fn start_session(&mut self) -> SessionPhase {
        self.phase = SessionPhase::Loading;
        self.game_id = None;
        self.grid = Grid::new();
        self.to_move = Disc::Yellow;

        match self.backend.new_game().await {
            Ok(response) => match response.game_id.clone() {
                Some(game_id) => {
                    self.game_id = Some(game_id);
                    match self.absorb(&response) {
                        Ok(()) => {
                            info!(game_id = ?self.game_id, phase = ?self.phase, "Session started")
                        }
                        Err(e) => {
                            warn!(error = %e, "Session start returned an invalid payload");
                            self.phase = SessionPhase::Over(Outcome::ConnectionLost);
                        }
                    }
                }
                None => {
                    warn!("Session start response carried no game id");
                    self.phase = SessionPhase::Over(Outcome::ConnectionLost);
                }
            },
            Err(e) => {
                warn!(error = %e, "Failed to start session");
                self.phase = SessionPhase::Over(Outcome::ConnectionLost);
            }
        }
        self.phase
    }

    /// Submits a move in the given column.
    ///
    /// Only valid while the session is `Active`. The top cell of the column
    /// is checked locally first, so a known-full column never costs a round
    /// trip. A backend rejection leaves all local state untouched.
    #[instrument(skip(self), fields(col, phase = ?self.phase))]
    pub async fn submit_move(&mut self, col: usize) -> MoveOutcome {
        if self.phase != SessionPhase::Active || col >= COLS {
            debug!("Ignoring move outside an active session");
            return MoveOutcome::Ignored;
        }
        if !self.grid.is_open(col) {
            debug!("Column is full, not contacting the backend");
            return MoveOutcome::ColumnFull;
        }
        let Some(game_id) = self.game_id.clone() else {
            return MoveOutcome::Ignored;
        };

        match self.backend.play(&game_id, col).await {
            Ok(response) => match self.absorb(&response) {
                Ok(()) => match self.phase {
                    SessionPhase::Over(outcome) => MoveOutcome::Finished(outcome),
                    _ => MoveOutcome::Placed,
                },
                Err(e) => {
                    warn!(error = %e, "Move response carried an invalid payload");
                    self.phase = SessionPhase::Over(Outcome::ConnectionLost);
                    MoveOutcome::Finished(Outcome::ConnectionLost)
                }
            },
            Err(e) if e.is_rejection() => {
                info!(error = %e, "Backend rejected the move");
                MoveOutcome::Rejected
            }
            Err(e) => {
                warn!(error = %e, "Lost connection while submitting move");
                self.phase = SessionPhase::Over(Outcome::ConnectionLost);
                MoveOutcome::Finished(Outcome::ConnectionLost)
            }
        }
    }

    /// Adopts a server response.
    ///
    /// Applied identically after session creation and after every move: the
    /// snapshot is replaced wholesale, then a non-zero win indicator beats the
    /// draw flag, and otherwise the turn is taken verbatim from the response.
    /// Nothing is mutated until the whole payload has decoded.
    fn absorb(&mut self, response: &GameResponse) -> Result<(), GridError> {
        let grid = response.state.decode_grid()?;
        let winner = response.winner()?;
        let to_move = response.state.decode_turn()?;

        self.grid = grid;
        self.to_move = to_move;
        self.phase = match winner {
            Some(disc) => SessionPhase::Over(Outcome::Win(disc)),
            None if response.is_draw => SessionPhase::Over(Outcome::Draw),
            None => SessionPhase::Active,
        };
        Ok(())
    }
}
