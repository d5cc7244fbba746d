//! Terminal client for a remote Connect Four service.
//!
//! The backend owns all authoritative state: move validation, win and draw
//! detection, and the opponent's replies. This crate is the thin presentation
//! side: a session state machine, the pinned JSON wire protocol, and an HTTP
//! client, plus a terminal front end in the binary.
//!
//! # Example
//!
//! ```no_run
//! use drop_four::{ApiClient, SessionController, SessionPhase};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ApiClient::new("http://localhost:8080/api");
//! let mut session = SessionController::new(Box::new(client));
//! if session.start_session().await == SessionPhase::Active {
//!     session.submit_move(3).await;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod client;
mod protocol;
mod session;

// Crate-level exports - Domain types
pub use board::{COLS, Cell, Disc, Grid, GridError, ROWS};

// Crate-level exports - Wire protocol
pub use protocol::{GameResponse, MoveRequest, ServerInfo, StatePayload};

// Crate-level exports - HTTP client
pub use client::{ApiClient, ClientError};

// Crate-level exports - Session state machine
pub use session::{GameBackend, GameId, MoveOutcome, Outcome, SessionController, SessionPhase};
