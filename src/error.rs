//! Validation errors for externally supplied grids.

use crate::types::MAX_TILE;
use derive_more::{Display, Error};

/// Error produced when validating an externally supplied grid.
///
/// The engine never produces these during normal play; they guard the
/// resume/testing path where a caller hands in an initial grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The supplied matrix is not 4x4.
    #[display("grid must be 4x4, got {rows}x{cols}")]
    WrongDimensions {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns in the offending row.
        cols: usize,
    },

    /// A non-empty cell holds a value that is not a power of two >= 2.
    #[display("cell ({row}, {col}) holds {value}, which is not a power of two >= 2")]
    NotAPowerOfTwo {
        /// Row index of the offending cell.
        row: usize,
        /// Column index of the offending cell.
        col: usize,
        /// The rejected value.
        value: u32,
    },

    /// A cell holds a power of two above the largest tile a 4x4 board
    /// can produce.
    #[display("cell ({row}, {col}) holds {value}, above the maximum tile {}", MAX_TILE)]
    AboveMaximumTile {
        /// Row index of the offending cell.
        row: usize,
        /// Column index of the offending cell.
        col: usize,
        /// The rejected value.
        value: u32,
    },
}
