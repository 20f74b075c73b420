//! Game logic and rules for the 2048 board engine.

use crate::action::{Direction, MoveOutcome};
use crate::collaborators::{BestScoreStore, InMemoryBestScore, NullScoreSink, ScoreSink};
use crate::combine::{combine_line, reversed};
use crate::error::GridError;
use crate::rng::{RandTileRng, TileRng};
use crate::types::{GameState, Grid, Row, Status, GRID_SIZE, WINNING_TILE};
use tracing::instrument;

/// Probability that a spawned tile is a 2 (otherwise a 4).
const TWO_TILE_PROBABILITY: f64 = 0.9;

/// 2048 game engine: a state machine over a 4x4 grid, a running score,
/// and a game status.
///
/// The engine owns all grid mutation, merge arithmetic, tile spawning,
/// and terminal-state detection. Everything else is reached through the
/// injected collaborators: a [`TileRng`] for spawn randomness, a
/// [`ScoreSink`] notified as the score changes, and a [`BestScoreStore`]
/// that persists the best score across games.
///
/// Each move replaces the grid wholesale, so a grid obtained through
/// [`Game::grid`] before the move never aliases the post-move grid.
pub struct Game {
    grid: Grid,
    score: u32,
    status: Status,
    rng: Box<dyn TileRng>,
    sink: Box<dyn ScoreSink>,
    store: Box<dyn BestScoreStore>,
}

impl Game {
    /// Creates an engine with an empty grid and default collaborators:
    /// entropy-seeded randomness, a discarding sink, and an in-memory
    /// best-score store.
    pub fn new() -> Self {
        Self::from_grid(Grid::new())
    }

    /// Creates an engine resuming from the given grid, with default
    /// collaborators.
    ///
    /// The status starts as [`Status::Idle`]; moves are accepted
    /// immediately, while [`Game::start`] wipes the grid and begins a
    /// fresh game.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            status: Status::Idle,
            rng: Box::new(RandTileRng::from_entropy()),
            sink: Box::new(NullScoreSink),
            store: Box::new(InMemoryBestScore::new()),
        }
    }

    /// Creates an engine resuming from a dynamic matrix, validating
    /// dimensions and cell values.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the matrix is not 4x4 or any non-zero
    /// cell is not a power of two >= 2.
    pub fn try_from_matrix(matrix: Vec<Vec<u32>>) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::try_from(matrix)?))
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: impl TileRng + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replaces the score sink.
    pub fn with_score_sink(mut self, sink: impl ScoreSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replaces the best-score store.
    pub fn with_best_store(mut self, store: impl BestScoreStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Returns the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the best score from the injected store.
    pub fn best_score(&self) -> u32 {
        self.store.read()
    }

    /// Returns a detached snapshot of grid, score, and status.
    pub fn snapshot(&self) -> GameState {
        GameState::new(self.grid, self.score, self.status)
    }

    /// Starts a fresh game: status becomes [`Status::Playing`], the grid
    /// and score reset, and two random tiles spawn.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.status = Status::Playing;
        self.grid = Grid::new();
        self.score = 0;
        self.add_random_tile();
        self.add_random_tile();
    }

    /// Restarts the game. Identical to [`Game::start`].
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.start();
    }

    /// Spawns one random tile on an empty cell: a 2 with probability 0.9,
    /// a 4 otherwise, uniformly placed.
    ///
    /// Quietly does nothing when the grid is full or the game has ended.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn add_random_tile(&mut self) {
        if self.status.is_terminal() {
            return;
        }

        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return;
        }

        let (row, col) = empty[self.rng.pick_index(empty.len())];
        let value = if self.rng.next_f64() < TWO_TILE_PROBABILITY {
            2
        } else {
            4
        };
        self.grid.set(row, col, value);
    }

    /// Applies one move in the given direction.
    ///
    /// A move on a terminal engine is a quiet no-op. Otherwise every line
    /// combines toward the move's edge, the sink hears the score once per
    /// line, and if the grid changed a new tile spawns -- unless the move
    /// ended the game first.
    #[instrument(skip(self), fields(direction = ?direction, score = self.score))]
    pub fn make_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status.is_terminal() {
            return MoveOutcome {
                moved: false,
                score_delta: 0,
                status: self.status,
            };
        }

        let previous = self.grid;
        let score_before = self.score;

        let (next, merged) = self.combine_grid(direction);
        let moved = merged || next != previous;
        self.grid = next;

        self.finalize_move(moved);

        MoveOutcome {
            moved,
            score_delta: self.score - score_before,
            status: self.status,
        }
    }

    /// Applies one move toward the left edge.
    #[instrument(skip(self))]
    pub fn move_left(&mut self) -> MoveOutcome {
        self.make_move(Direction::Left)
    }

    /// Applies one move toward the right edge.
    #[instrument(skip(self))]
    pub fn move_right(&mut self) -> MoveOutcome {
        self.make_move(Direction::Right)
    }

    /// Applies one move toward the top edge.
    #[instrument(skip(self))]
    pub fn move_up(&mut self) -> MoveOutcome {
        self.make_move(Direction::Up)
    }

    /// Applies one move toward the bottom edge.
    #[instrument(skip(self))]
    pub fn move_down(&mut self) -> MoveOutcome {
        self.make_move(Direction::Down)
    }

    /// Combines every line of the grid toward the move's edge and returns
    /// the new grid plus whether any merge happened.
    ///
    /// Right and down reverse each line so the leftward combine applies;
    /// up and down operate on the transposed grid.
    fn combine_grid(&mut self, direction: Direction) -> (Grid, bool) {
        let reverse_lines = matches!(direction, Direction::Right | Direction::Down);
        let transpose = matches!(direction, Direction::Up | Direction::Down);

        let source = if transpose {
            self.grid.transposed()
        } else {
            self.grid
        };

        let mut rows: [Row; GRID_SIZE] = *source.rows();
        let mut merged_any = false;

        for row in rows.iter_mut() {
            let input = if reverse_lines { reversed(*row) } else { *row };
            let result = combine_line(input);
            *row = if reverse_lines {
                reversed(result.line)
            } else {
                result.line
            };

            self.score += result.score_delta;
            merged_any |= result.merged;
            self.report_line_score();
        }

        let combined = Grid::from_rows_unchecked(rows);
        let next = if transpose {
            combined.transposed()
        } else {
            combined
        };

        (next, merged_any)
    }

    /// Consults the best-score store and notifies the sink, once per
    /// processed line. Embedders relying on exact call counts observe
    /// four reports per move.
    fn report_line_score(&mut self) {
        if self.store.write_if_greater(self.score) {
            self.sink.report_best(self.store.read());
        }
        self.sink.report(self.score);
    }

    /// Settles the move: win check first, then lose check, then a spawn
    /// if the grid changed.
    fn finalize_move(&mut self, moved: bool) {
        if self.grid.contains(WINNING_TILE) {
            self.status = Status::Win;
            return;
        }

        if self.grid.is_full() && !self.grid.has_mergeable_pair() {
            self.status = Status::Lose;
            return;
        }

        if moved {
            self.add_random_tile();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("grid", &self.grid)
            .field("score", &self.score)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
