//! Wire types for the backend HTTP API.
//!
//! The canonical schema: camelCase envelope fields, snake_case state fields,
//! occupant codes 0 (empty), 1 (yellow), 2 (red).

use serde::{Deserialize, Serialize};

use crate::board::{Disc, Grid, GridError};

/// Board snapshot nested in every game response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatePayload {
    /// Cell codes, row-major, row 0 at the top.
    pub grid: Vec<Vec<u8>>,
    /// Code of the side to move (1 or 2).
    pub current_turn: u8,
    /// Row of the last placed disc, -1 before any move.
    #[serde(default = "no_move")]
    pub last_move_row: i32,
    /// Column of the last placed disc, -1 before any move.
    #[serde(default = "no_move")]
    pub last_move_col: i32,
}

fn no_move() -> i32 {
    -1
}

impl StatePayload {
    /// Decodes the raw grid into a checked domain snapshot.
    pub fn decode_grid(&self) -> Result<Grid, GridError> {
        Grid::from_rows(&self.grid)
    }

    /// Decodes the side to move.
    pub fn decode_turn(&self) -> Result<Disc, GridError> {
        Disc::from_code(self.current_turn).ok_or(GridError::Turn {
            code: self.current_turn,
        })
    }
}

/// Envelope returned by `/new`, `/move`, and `/state`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    /// Session identifier; only sent on `/new`.
    #[serde(rename = "gameId", default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    /// Authoritative board snapshot.
    pub state: StatePayload,
    /// Winning occupant code, 0 when nobody has won.
    #[serde(rename = "checkWin", default)]
    pub check_win: u8,
    /// True when the board filled with no winner.
    #[serde(rename = "isDraw", default)]
    pub is_draw: bool,
}

impl GameResponse {
    /// The winning disc indicated by the response, if any.
    pub fn winner(&self) -> Result<Option<Disc>, GridError> {
        match self.check_win {
            0 => Ok(None),
            code => Disc::from_code(code)
                .map(Some)
                .ok_or(GridError::Win { code }),
        }
    }
}

/// Body of a `/move` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Session identifier issued by `/new`.
    #[serde(rename = "gameId")]
    pub game_id: String,
    /// Target column, 0-based.
    pub col: usize,
}

/// Build metadata served by `/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Backend version string.
    pub version: String,
    /// Whether the backend forces a center opening move.
    #[serde(rename = "centerOpening", default)]
    pub center_opening: bool,
}
