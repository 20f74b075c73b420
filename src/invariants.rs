//! First-class invariants for the 2048 board engine.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and serve as documentation of the
//! engine's guarantees.

use crate::rules::Game;
use crate::types::{Status, WINNING_TILE};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: every non-empty cell is a power of two >= 2.
///
/// Merging doubles powers of two and spawning writes 2 or 4, so no
/// operation can break this once the grid is constructed valid.
pub struct PowerOfTwoTiles;

impl Invariant<Game> for PowerOfTwoTiles {
    fn holds(game: &Game) -> bool {
        game.grid()
            .rows()
            .iter()
            .flatten()
            .all(|&cell| cell == 0 || (cell >= 2 && cell.is_power_of_two()))
    }

    fn description() -> &'static str {
        "Every non-empty cell is a power of two >= 2"
    }
}

/// Invariant: terminal status agrees with the grid.
///
/// `Win` requires a 2048 tile on the grid; `Lose` requires a full grid
/// with no equal adjacent pair.
pub struct TerminalStatusConsistent;

impl Invariant<Game> for TerminalStatusConsistent {
    fn holds(game: &Game) -> bool {
        match game.status() {
            Status::Win => game.grid().contains(WINNING_TILE),
            Status::Lose => game.grid().is_full() && !game.grid().has_mergeable_pair(),
            Status::Idle | Status::Playing => true,
        }
    }

    fn description() -> &'static str {
        "Terminal status agrees with the grid contents"
    }
}

/// All board-engine invariants as a composable set.
pub type BoardInvariants = (PowerOfTwoTiles, TerminalStatusConsistent);
