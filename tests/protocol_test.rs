//! Tests for the wire protocol types against the canonical schema.

use drop_four::{Cell, Disc, GameResponse, GridError, MoveRequest, ServerInfo};

fn canonical_new_response() -> &'static str {
    r#"{
        "gameId": "game-1",
        "state": {
            "grid": [
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,2,0,0,0]
            ],
            "current_turn": 1,
            "last_move_row": 5,
            "last_move_col": 3
        },
        "checkWin": 0,
        "isDraw": false
    }"#
}

#[test]
fn test_decode_new_response() {
    let response: GameResponse = serde_json::from_str(canonical_new_response()).unwrap();

    assert_eq!(response.game_id.as_deref(), Some("game-1"));
    assert_eq!(response.check_win, 0);
    assert!(!response.is_draw);
    assert_eq!(response.winner().unwrap(), None);
    assert_eq!(response.state.last_move_row, 5);
    assert_eq!(response.state.last_move_col, 3);
    assert_eq!(response.state.decode_turn().unwrap(), Disc::Yellow);

    // The backend opened in the center, as its version string advertises.
    let grid = response.state.decode_grid().unwrap();
    assert_eq!(grid.get(5, 3), Some(Cell::Taken(Disc::Red)));
    assert_eq!(grid.get(0, 0), Some(Cell::Empty));
}

#[test]
fn test_envelope_fields_default_when_absent() {
    let body = r#"{
        "state": {
            "grid": [
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0]
            ],
            "current_turn": 1
        }
    }"#;
    let response: GameResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.game_id, None);
    assert_eq!(response.check_win, 0);
    assert!(!response.is_draw);
    assert_eq!(response.state.last_move_row, -1);
    assert_eq!(response.state.last_move_col, -1);
}

#[test]
fn test_move_request_field_names() {
    let request = MoveRequest {
        game_id: "game-9".to_string(),
        col: 3,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json, serde_json::json!({"gameId": "game-9", "col": 3}));
}

#[test]
fn test_winner_decodes_win_code() {
    let mut response: GameResponse = serde_json::from_str(canonical_new_response()).unwrap();

    response.check_win = 2;
    assert_eq!(response.winner().unwrap(), Some(Disc::Red));

    response.check_win = 1;
    assert_eq!(response.winner().unwrap(), Some(Disc::Yellow));

    response.check_win = 5;
    assert_eq!(response.winner(), Err(GridError::Win { code: 5 }));
}

#[test]
fn test_invalid_turn_code_is_an_error() {
    let mut response: GameResponse = serde_json::from_str(canonical_new_response()).unwrap();
    response.state.current_turn = 0;
    assert_eq!(
        response.state.decode_turn(),
        Err(GridError::Turn { code: 0 })
    );
}

#[test]
fn test_malformed_grid_is_an_error_not_a_panic() {
    let body = r#"{
        "state": {"grid": [[0,0],[1]], "current_turn": 1},
        "checkWin": 0,
        "isDraw": false
    }"#;
    let response: GameResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.state.decode_grid(), Err(GridError::Shape));
}

#[test]
fn test_server_info_ignores_unknown_fields() {
    let body = r#"{
        "version": "v1.1-center-opening",
        "centerOpening": true,
        "preferredCols": [3, 2, 4, 1, 5, 0, 6]
    }"#;
    let info: ServerInfo = serde_json::from_str(body).unwrap();
    assert_eq!(info.version, "v1.1-center-opening");
    assert!(info.center_opening);
}
