//! Tests for the grid domain types.

use drop_four::{COLS, Cell, Disc, Grid, GridError, ROWS};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            assert_eq!(grid.get(row, col), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let grid = Grid::new();
    assert_eq!(grid.get(ROWS, 0), None);
    assert_eq!(grid.get(0, COLS), None);
}

#[test]
fn test_from_rows_decodes_codes() {
    let mut rows = vec![vec![0u8; COLS]; ROWS];
    rows[5][3] = 1;
    rows[5][4] = 2;

    let grid = Grid::from_rows(&rows).unwrap();
    assert_eq!(grid.get(5, 3), Some(Cell::Taken(Disc::Yellow)));
    assert_eq!(grid.get(5, 4), Some(Cell::Taken(Disc::Red)));
    assert_eq!(grid.get(0, 0), Some(Cell::Empty));
}

#[test]
fn test_from_rows_rejects_missing_row() {
    let rows = vec![vec![0u8; COLS]; ROWS - 1];
    assert_eq!(Grid::from_rows(&rows), Err(GridError::Shape));
}

#[test]
fn test_from_rows_rejects_short_row() {
    let mut rows = vec![vec![0u8; COLS]; ROWS];
    rows[2] = vec![0u8; COLS - 1];
    assert_eq!(Grid::from_rows(&rows), Err(GridError::Shape));
}

#[test]
fn test_from_rows_rejects_bad_cell_code() {
    let mut rows = vec![vec![0u8; COLS]; ROWS];
    rows[0][0] = 9;
    assert_eq!(Grid::from_rows(&rows), Err(GridError::Cell { code: 9 }));
}

#[test]
fn test_column_openness_tracks_top_cell() {
    let mut rows = vec![vec![0u8; COLS]; ROWS];
    rows[0][2] = 2;

    let grid = Grid::from_rows(&rows).unwrap();
    assert!(!grid.is_open(2));
    assert!(grid.is_open(0));
    assert!(grid.is_open(6));
}

#[test]
fn test_out_of_range_column_is_never_open() {
    let grid = Grid::new();
    assert!(!grid.is_open(COLS));
}

#[test]
fn test_display_marks_discs() {
    let mut rows = vec![vec![0u8; COLS]; ROWS];
    rows[5][0] = 1;
    rows[5][1] = 2;

    let grid = Grid::from_rows(&rows).unwrap();
    let shown = grid.display();
    assert_eq!(shown.lines().count(), ROWS);
    assert_eq!(shown.lines().next().unwrap(), ". . . . . . .");
    assert_eq!(shown.lines().last().unwrap(), "Y R . . . . .");
}
