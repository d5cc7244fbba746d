//! Core domain types for the Connect Four grid.

use derive_more::{Display, Error};

/// Number of rows in the grid.
pub const ROWS: usize = 6;
/// Number of columns in the grid.
pub const COLS: usize = 7;

/// A disc on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Disc {
    /// The local player's disc (wire code 1).
    Yellow,
    /// The remote opponent's disc (wire code 2).
    Red,
}

impl Disc {
    /// Decodes a wire occupant code (1 or 2).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Disc::Yellow),
            2 => Some(Disc::Red),
            _ => None,
        }
    }
}

/// A cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Nothing has been dropped here yet.
    Empty,
    /// Cell occupied by a disc.
    Taken(Disc),
}

impl Cell {
    /// Decodes a wire cell code (0, 1, or 2).
    pub fn from_code(code: u8) -> Result<Self, GridError> {
        if code == 0 {
            return Ok(Cell::Empty);
        }
        Disc::from_code(code)
            .map(Cell::Taken)
            .ok_or(GridError::Cell { code })
    }
}

/// Violations of the state payload invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The payload grid is not 6 rows of 7 columns.
    #[display("grid is not 6x7")]
    Shape,
    /// A cell code outside 0..=2.
    #[display("cell code {code} is not a valid occupant")]
    Cell {
        /// The offending code.
        code: u8,
    },
    /// A turn code that names neither occupant.
    #[display("turn code {code} is not a valid occupant")]
    Turn {
        /// The offending code.
        code: u8,
    },
    /// A win code that names neither occupant.
    #[display("win code {code} is not a valid occupant")]
    Win {
        /// The offending code.
        code: u8,
    },
}

/// 6x7 Connect Four grid, row-major with row 0 at the top.
///
/// A grid is always a complete snapshot adopted from a server response and is
/// replaced wholesale, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    /// Creates a new empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Gets the cell at the given coordinates.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Whether a disc can still be dropped in the column.
    ///
    /// Only the top cell matters: a non-empty top cell means the column is
    /// full. Out-of-range columns are never open.
    pub fn is_open(&self, col: usize) -> bool {
        col < COLS && matches!(self.cells[0][col], Cell::Empty)
    }

    /// Decodes a raw wire grid into a checked snapshot.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        if rows.len() != ROWS {
            return Err(GridError::Shape);
        }
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, codes) in rows.iter().enumerate() {
            if codes.len() != COLS {
                return Err(GridError::Shape);
            }
            for (col, code) in codes.iter().enumerate() {
                cells[row][col] = Cell::from_code(*code)?;
            }
        }
        Ok(Self { cells })
    }

    /// Formats the grid as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                result.push('\n');
            }
            let line: Vec<&str> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Taken(Disc::Yellow) => "Y",
                    Cell::Taken(Disc::Red) => "R",
                })
                .collect();
            result.push_str(&line.join(" "));
        }
        result
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
