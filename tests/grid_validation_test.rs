//! Tests for grid validation: malformed input fails fast.

use strictly_2048::{Game, Grid, GridError, ScriptedRng, MAX_TILE};

#[test]
fn test_accepts_valid_grid() {
    let grid = Grid::from_rows([
        [0, 2, 4, 8],
        [16, 32, 64, 128],
        [256, 512, 1024, 2048],
        [4096, 0, 0, 0],
    ]);

    assert!(grid.is_ok());
}

#[test]
fn test_rejects_non_power_of_two() {
    let grid = Grid::from_rows([
        [0, 0, 0, 0],
        [0, 0, 3, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);

    assert_eq!(
        grid,
        Err(GridError::NotAPowerOfTwo {
            row: 1,
            col: 2,
            value: 3
        })
    );
}

#[test]
fn test_rejects_one() {
    // 1 is a power of two but not a legal tile.
    let grid = Grid::from_rows([
        [1, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);

    assert_eq!(
        grid,
        Err(GridError::NotAPowerOfTwo {
            row: 0,
            col: 0,
            value: 1
        })
    );
}

#[test]
fn test_rejects_tiles_above_the_maximum() {
    // 2^31 is a power of two, but merging a pair of them would overflow
    // the cell. Validation refuses the grid outright.
    let huge = 1u32 << 31;
    let grid = Grid::from_rows([
        [huge, huge, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);

    assert_eq!(
        grid,
        Err(GridError::AboveMaximumTile {
            row: 0,
            col: 0,
            value: huge
        })
    );
}

#[test]
fn test_largest_legal_tiles_merge_without_overflow() {
    let grid = Grid::from_rows([
        [MAX_TILE, MAX_TILE, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ])
    .expect("maximum tile is accepted");
    let mut game = Game::from_grid(grid).with_rng(ScriptedRng::new());

    let outcome = game.move_left();

    assert_eq!(game.grid().get(0, 0), Some(2 * MAX_TILE));
    assert_eq!(outcome.score_delta, 2 * MAX_TILE);
}

#[test]
fn test_rejects_wrong_row_count() {
    let matrix = vec![vec![0u32; 4]; 3];

    assert_eq!(
        Grid::try_from(matrix),
        Err(GridError::WrongDimensions { rows: 3, cols: 4 })
    );
}

#[test]
fn test_rejects_short_row() {
    let mut matrix = vec![vec![0u32; 4]; 4];
    matrix[2] = vec![0, 0, 0];

    assert_eq!(
        Grid::try_from(matrix),
        Err(GridError::WrongDimensions { rows: 4, cols: 3 })
    );
}

#[test]
fn test_game_constructor_propagates_validation() {
    let matrix = vec![vec![7u32; 4]; 4];

    assert!(Game::try_from_matrix(matrix).is_err());
}

#[test]
fn test_error_messages_name_the_offence() {
    let err = GridError::WrongDimensions { rows: 3, cols: 4 };
    assert!(err.to_string().contains("4x4"));

    let err = GridError::NotAPowerOfTwo {
        row: 1,
        col: 2,
        value: 3,
    };
    assert!(err.to_string().contains("(1, 2)"));
}

#[test]
fn test_serde_revalidates_on_deserialize() {
    let valid: Result<Grid, _> =
        serde_json::from_str("[[0,2,4,8],[0,0,0,0],[0,0,0,0],[0,0,0,0]]");
    assert!(valid.is_ok());

    let invalid: Result<Grid, _> =
        serde_json::from_str("[[0,3,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]");
    assert!(invalid.is_err());
}

#[test]
fn test_grid_serializes_as_bare_matrix() {
    let grid = Grid::from_rows([
        [2, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 4],
    ])
    .expect("valid grid");

    let json = serde_json::to_string(&grid).expect("serialize");
    assert_eq!(json, "[[2,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,4]]");
}

#[test]
fn test_display_renders_rows() {
    let grid = Grid::from_rows([
        [2, 0, 0, 0],
        [0, 4, 0, 0],
        [0, 0, 8, 0],
        [0, 0, 0, 16],
    ])
    .expect("valid grid");

    let rendered = grid.display();

    assert_eq!(rendered.lines().count(), 4);
    assert!(rendered.starts_with("2 . . ."));
    assert!(rendered.ends_with(". . . 16"));
}
