//! Core domain types for the 2048 board engine.

use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const GRID_SIZE: usize = 4;

/// The tile value that ends the game in a win.
pub const WINNING_TILE: u32 = 2048;

/// The largest tile value a 4x4 board can produce (2^17, reached only by
/// merging the full board down to one tile).
///
/// Grid validation rejects anything above it, which also keeps merge
/// arithmetic comfortably inside `u32`: the largest possible merge
/// result is `2 * MAX_TILE`.
pub const MAX_TILE: u32 = 131_072;

/// One row of the grid, left to right.
pub type Row = [u32; GRID_SIZE];

/// 4x4 grid of tiles in row-major order.
///
/// A cell is `0` when empty, otherwise a power of two >= 2. The type
/// enforces the 4x4 shape; the constructors enforce the value invariant,
/// so every `Grid` in circulation is well-formed. Serialization uses the
/// bare 4x4 matrix and re-validates on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "[[u32; GRID_SIZE]; GRID_SIZE]",
    into = "[[u32; GRID_SIZE]; GRID_SIZE]"
)]
pub struct Grid {
    rows: [Row; GRID_SIZE],
}

impl Grid {
    /// Creates an empty grid (all zeros).
    pub fn new() -> Self {
        Self {
            rows: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Creates a grid from a 4x4 matrix, validating every cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotAPowerOfTwo`] if any non-zero cell is not
    /// a power of two >= 2, or [`GridError::AboveMaximumTile`] if a cell
    /// exceeds [`MAX_TILE`].
    pub fn from_rows(rows: [Row; GRID_SIZE]) -> Result<Self, GridError> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                if value < 2 || !value.is_power_of_two() {
                    return Err(GridError::NotAPowerOfTwo { row, col, value });
                }
                if value > MAX_TILE {
                    return Err(GridError::AboveMaximumTile { row, col, value });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Creates a grid from rows the engine already knows are valid.
    ///
    /// Combining a valid grid only produces doubled powers of two, so the
    /// move pipeline skips re-validation.
    pub(crate) fn from_rows_unchecked(rows: [Row; GRID_SIZE]) -> Self {
        Self { rows }
    }

    /// Returns all rows in row-major order.
    pub fn rows(&self) -> &[Row; GRID_SIZE] {
        &self.rows
    }

    /// Gets the cell at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Sets a cell. Callers uphold the power-of-two invariant.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.rows[row][col] = value;
    }

    /// Returns the grid with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (r, cells) in self.rows.iter().enumerate() {
            for (c, &value) in cells.iter().enumerate() {
                rows[c][r] = value;
            }
        }
        Self { rows }
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&cell| cell != 0)
    }

    /// Returns the coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (row, row_cells) in self.rows.iter().enumerate() {
            for (col, &value) in row_cells.iter().enumerate() {
                if value == 0 {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Checks if any cell holds exactly `value`.
    pub fn contains(&self, value: u32) -> bool {
        self.rows.iter().flatten().any(|&cell| cell == value)
    }

    /// Checks if any cell has an equal neighbor to its right or below.
    ///
    /// On a full grid this decides whether a move is still possible.
    pub fn has_mergeable_pair(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.rows[row][col];

                if col + 1 < GRID_SIZE && value == self.rows[row][col + 1] {
                    return true;
                }
                if row + 1 < GRID_SIZE && value == self.rows[row + 1][col] {
                    return true;
                }
            }
        }
        false
    }

    /// Formats the grid as a human-readable string, one row per line.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                result.push('\n');
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&cell| {
                    if cell == 0 {
                        ".".to_string()
                    } else {
                        cell.to_string()
                    }
                })
                .collect();
            result.push_str(&cells.join(" "));
        }
        result
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[Row; GRID_SIZE]> for Grid {
    type Error = GridError;

    fn try_from(rows: [Row; GRID_SIZE]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for [Row; GRID_SIZE] {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl TryFrom<Vec<Vec<u32>>> for Grid {
    type Error = GridError;

    fn try_from(matrix: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        if matrix.len() != GRID_SIZE {
            return Err(GridError::WrongDimensions {
                rows: matrix.len(),
                cols: matrix.first().map_or(0, Vec::len),
            });
        }

        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, cells) in matrix.iter().enumerate() {
            if cells.len() != GRID_SIZE {
                return Err(GridError::WrongDimensions {
                    rows: matrix.len(),
                    cols: cells.len(),
                });
            }
            rows[row].copy_from_slice(cells);
        }

        Self::from_rows(rows)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Game has not been started yet.
    Idle,
    /// Game is ongoing.
    Playing,
    /// A tile reached 2048.
    Win,
    /// The grid is full and no merge is possible.
    Lose,
}

impl Status {
    /// Checks if the game has ended.
    ///
    /// Terminal status only clears on restart.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Win | Status::Lose)
    }
}

/// Snapshot of the complete game state.
///
/// Detached from the live engine: further moves never mutate a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The grid at the time of the snapshot.
    grid: Grid,
    /// The score at the time of the snapshot.
    score: u32,
    /// The status at the time of the snapshot.
    status: Status,
}

impl GameState {
    /// Creates a snapshot.
    pub(crate) fn new(grid: Grid, score: u32, status: Status) -> Self {
        Self {
            grid,
            score,
            status,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the status.
    pub fn status(&self) -> Status {
        self.status
    }
}
