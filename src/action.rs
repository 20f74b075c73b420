//! First-class move types for the 2048 board engine.
//!
//! Moves are domain events, not side effects. A [`Direction`] names the
//! player's intent; a [`MoveOutcome`] reports what the engine did with it.

use crate::types::Status;
use serde::{Deserialize, Serialize};

/// Direction of a move: all tiles slide and merge toward this edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Slide tiles toward the left edge.
    Left,
    /// Slide tiles toward the right edge.
    Right,
    /// Slide tiles toward the top edge.
    Up,
    /// Slide tiles toward the bottom edge.
    Down,
}

/// Result of applying one move to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether the move changed the grid (and therefore spawned a tile,
    /// unless the move ended the game).
    pub moved: bool,
    /// Points earned from merges in this move.
    pub score_delta: u32,
    /// Status after the move.
    pub status: Status,
}
