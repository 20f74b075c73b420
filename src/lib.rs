//! Pure 2048 game logic.
//!
//! A state machine over a 4x4 grid of power-of-two tiles: four
//! directional moves, merge/scoring rules, random tile spawning, and
//! win/lose detection. The engine is free of platform access; everything
//! it observes or affects outside its own state goes through injected
//! collaborators:
//!
//! - [`TileRng`] - randomness for tile spawning, seedable for replay
//! - [`ScoreSink`] - notified as the score changes
//! - [`BestScoreStore`] - owns the best score across games
//!
//! # Example
//!
//! ```
//! use strictly_2048::{Direction, Game, RandTileRng, Status};
//!
//! let mut game = Game::new().with_rng(RandTileRng::seeded(42));
//! game.start();
//! assert_eq!(game.status(), Status::Playing);
//!
//! let outcome = game.make_move(Direction::Left);
//! println!("score: {}, moved: {}", game.score(), outcome.moved);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod collaborators;
mod combine;
mod error;
mod invariants;
mod rng;
mod rules;
mod types;

// Crate-level exports - move events
pub use action::{Direction, MoveOutcome};

// Crate-level exports - collaborator seams
pub use collaborators::{
    BestScoreStore, InMemoryBestScore, NullScoreSink, RecordingScoreSink, ScoreSink,
};

// Crate-level exports - validation
pub use error::GridError;

// Crate-level exports - first-class invariants
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, PowerOfTwoTiles,
    TerminalStatusConsistent,
};

// Crate-level exports - randomness
pub use rng::{RandTileRng, ScriptedRng, TileRng};

// Crate-level exports - the engine
pub use rules::Game;

// Crate-level exports - domain types
pub use types::{GameState, Grid, Row, Status, GRID_SIZE, MAX_TILE, WINNING_TILE};
