//! 2048 game logic: row collapsing, grid rotation, move resolution.
//!
//! Every direction is handled by rotating the grid so the move becomes a
//! leftward slide, collapsing each row, then rotating back.

use super::types::*;
use crate::core::constants::GRID_SIZE;
use crate::games::{Direction, GameInput};
use rand::Rng;

/// Create a new game with its two opening tiles.
pub fn start_2048_game<R: Rng>(rng: &mut R) -> Game2048 {
    Game2048::new(rng)
}

/// Slide a row to the left, merging equal neighbours.
///
/// Each tile merges at most once, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
pub fn collapse_row_left(row: [u32; GRID_SIZE]) -> [u32; GRID_SIZE] {
    let tiles: Vec<u32> = row.iter().copied().filter(|&v| v != 0).collect();
    let mut out = [0; GRID_SIZE];
    let mut write = 0;
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            out[write] = tiles[i] * 2;
            i += 2;
        } else {
            out[write] = tiles[i];
            i += 1;
        }
        write += 1;
    }
    out
}

/// Rotate 90° clockwise: `(i, j) -> (j, N-1-i)`.
pub fn rotate_clockwise(grid: &Grid) -> Grid {
    let mut out = empty_grid();
    for (i, row) in grid.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            out[j][GRID_SIZE - 1 - i] = value;
        }
    }
    out
}

/// Rotate 90° counter-clockwise: `(i, j) -> (N-1-j, i)`.
pub fn rotate_counter_clockwise(grid: &Grid) -> Grid {
    let mut out = empty_grid();
    for (i, row) in grid.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            out[GRID_SIZE - 1 - j][i] = value;
        }
    }
    out
}

/// Collapse every row leftward. Returns the new grid and whether any row changed.
fn collapse_rows(grid: &Grid) -> (Grid, bool) {
    let mut out = *grid;
    let mut moved = false;
    for row in out.iter_mut() {
        let collapsed = collapse_row_left(*row);
        if collapsed != *row {
            moved = true;
        }
        *row = collapsed;
    }
    (out, moved)
}

/// Slide the whole grid in `direction` without spawning anything.
///
/// Returns the slid grid and whether any cell changed.
pub fn slide(grid: &Grid, direction: Direction) -> (Grid, bool) {
    match direction {
        Direction::Left => collapse_rows(grid),
        Direction::Right => {
            let half_turn = rotate_clockwise(&rotate_clockwise(grid));
            let (collapsed, moved) = collapse_rows(&half_turn);
            (rotate_clockwise(&rotate_clockwise(&collapsed)), moved)
        }
        Direction::Up => {
            let (collapsed, moved) = collapse_rows(&rotate_counter_clockwise(grid));
            (rotate_clockwise(&collapsed), moved)
        }
        Direction::Down => {
            let (collapsed, moved) = collapse_rows(&rotate_clockwise(grid));
            (rotate_counter_clockwise(&collapsed), moved)
        }
    }
}

/// True when the grid is full and no two orthogonal neighbours match.
pub fn check_game_over(grid: &Grid) -> bool {
    for i in 0..GRID_SIZE {
        for j in 0..GRID_SIZE {
            let value = grid[i][j];
            if value == 0 {
                return false;
            }
            if i + 1 < GRID_SIZE && grid[i + 1][j] == value {
                return false;
            }
            if j + 1 < GRID_SIZE && grid[i][j + 1] == value {
                return false;
            }
        }
    }
    true
}

/// Apply a move. A move that changes nothing, or any move after game over,
/// returns the game untouched.
pub fn apply_move<R: Rng>(mut game: Game2048, direction: Direction, rng: &mut R) -> Game2048 {
    if game.game_over {
        return game;
    }

    let (slid, moved) = slide(&game.grid, direction);
    if !moved {
        return game;
    }

    game.grid = spawn_tile(slid, rng);
    game.score = grid_sum(&game.grid);
    game.moves += 1;
    game.game_over = check_game_over(&game.grid);
    game
}

/// Fresh grid with two opening tiles, score 0.
pub fn reset<R: Rng>(rng: &mut R) -> Game2048 {
    Game2048::new(rng)
}

/// Route a UI-agnostic input to the matching transition.
pub fn process_input<R: Rng>(game: Game2048, input: GameInput, rng: &mut R) -> Game2048 {
    match input {
        GameInput::Move(direction) => apply_move(game, direction, rng),
        GameInput::Select | GameInput::Restart if game.game_over => reset(rng),
        _ => game,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn game_with(grid: Grid) -> Game2048 {
        let mut rng = create_test_rng();
        let mut game = Game2048::new(&mut rng);
        game.grid = grid;
        game
    }

    #[test]
    fn test_collapse_simple_merge() {
        assert_eq!(collapse_row_left([2, 2, 0, 0]), [4, 0, 0, 0]);
    }

    #[test]
    fn test_collapse_no_chain_merge() {
        assert_eq!(collapse_row_left([2, 2, 2, 2]), [4, 4, 0, 0]);
        assert_eq!(collapse_row_left([4, 4, 8, 0]), [8, 8, 0, 0]);
    }

    #[test]
    fn test_collapse_slides_over_gaps() {
        assert_eq!(collapse_row_left([0, 0, 2, 2]), [4, 0, 0, 0]);
        assert_eq!(collapse_row_left([2, 0, 2, 0]), [4, 0, 0, 0]);
        assert_eq!(collapse_row_left([0, 4, 0, 2]), [4, 2, 0, 0]);
    }

    #[test]
    fn test_collapse_leftmost_pair_wins() {
        assert_eq!(collapse_row_left([2, 2, 2, 0]), [4, 2, 0, 0]);
        assert_eq!(collapse_row_left([8, 4, 4, 4]), [8, 8, 4, 0]);
    }

    #[test]
    fn test_collapse_unchanged_rows() {
        assert_eq!(collapse_row_left([0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(collapse_row_left([2, 4, 8, 16]), [2, 4, 8, 16]);
        assert_eq!(collapse_row_left([2, 4, 0, 0]), [2, 4, 0, 0]);
    }

    #[test]
    fn test_rotation_mapping() {
        let grid: Grid = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]];
        let cw = rotate_clockwise(&grid);
        assert_eq!(cw[0], [13, 9, 5, 1]);
        assert_eq!(cw[3], [16, 12, 8, 4]);
        let ccw = rotate_counter_clockwise(&grid);
        assert_eq!(ccw[0], [4, 8, 12, 16]);
        assert_eq!(ccw[3], [1, 5, 9, 13]);
        assert_eq!(rotate_counter_clockwise(&cw), grid);
        assert_eq!(rotate_clockwise(&ccw), grid);
    }

    #[test]
    fn test_slide_each_direction() {
        let grid: Grid = [[2, 0, 0, 2], [0, 0, 0, 0], [0, 4, 0, 0], [0, 4, 0, 0]];

        let (left, moved) = slide(&grid, Direction::Left);
        assert!(moved);
        assert_eq!(left, [[4, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 0]]);

        let (right, _) = slide(&grid, Direction::Right);
        assert_eq!(right, [[0, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 4], [0, 0, 0, 4]]);

        let (up, _) = slide(&grid, Direction::Up);
        assert_eq!(up, [[2, 8, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

        let (down, _) = slide(&grid, Direction::Down);
        assert_eq!(down, [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [2, 8, 0, 2]]);
    }

    #[test]
    fn test_slide_reports_no_motion() {
        let grid: Grid = [[2, 4, 0, 0], [4, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
        let (same, moved) = slide(&grid, Direction::Left);
        assert!(!moved);
        assert_eq!(same, grid);
        let (_, moved) = slide(&grid, Direction::Up);
        assert!(!moved);
    }

    #[test]
    fn test_noop_move_changes_nothing() {
        let mut game = game_with([[2, 4, 0, 0], [4, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        game.score = 12;
        let before = game.clone();
        let mut rng = create_test_rng();

        let after = apply_move(game, Direction::Left, &mut rng);
        assert_eq!(after, before);
    }

    #[test]
    fn test_successful_move_spawns_exactly_one_tile() {
        let game = game_with([[2, 2, 0, 0], [0, 0, 0, 0], [0, 4, 0, 0], [0, 0, 0, 0]]);
        let mut rng = create_test_rng();
        let (slid, _) = slide(&game.grid, Direction::Left);
        let slid_tiles = slid.iter().flatten().filter(|&&v| v != 0).count();

        let game = apply_move(game, Direction::Left, &mut rng);

        assert_eq!(game.tile_count(), slid_tiles + 1);
        assert_eq!(game.grid[0][0], 4);
        assert_eq!(game.grid[2][0], 4);
        assert_eq!(game.moves, 1);
    }

    #[test]
    fn test_score_is_grid_sum() {
        let game = game_with([[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8]]);
        let mut rng = create_test_rng();

        let game = apply_move(game, Direction::Left, &mut rng);

        assert_eq!(game.score, grid_sum(&game.grid));
        // 4 + 8 plus the spawned 2 or 4
        assert!(game.score == 14 || game.score == 16);
    }

    #[test]
    fn test_game_over_full_grid_no_pairs() {
        let grid: Grid = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        assert!(check_game_over(&grid));
    }

    #[test]
    fn test_game_not_over_with_horizontal_pair() {
        let grid: Grid = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]];
        assert!(!check_game_over(&grid));
    }

    #[test]
    fn test_game_not_over_with_vertical_pair() {
        let grid: Grid = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 16, 32]];
        assert!(!check_game_over(&grid));
    }

    #[test]
    fn test_game_not_over_with_empty_cell() {
        let grid: Grid = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]];
        assert!(!check_game_over(&grid));
    }

    #[test]
    fn test_merge_keeps_game_alive() {
        let game = game_with([[8, 8, 16, 32], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let mut rng = create_test_rng();

        let game = apply_move(game, Direction::Left, &mut rng);

        assert_eq!(&game.grid[0][..3], &[16, 16, 32]);
        assert_eq!(game.tile_count(), 16);
        // The two 16s can still merge
        assert!(!game.game_over);
    }

    #[test]
    fn test_move_detects_terminal_grid() {
        let game = game_with([
            [2, 8, 16, 32],
            [64, 128, 256, 512],
            [8, 2, 16, 32],
            [64, 128, 256, 0],
        ]);
        let mut rng = create_test_rng();

        let game = apply_move(game, Direction::Right, &mut rng);

        assert_eq!(&game.grid[3][1..], &[64, 128, 256]);
        assert_eq!(game.tile_count(), 16);
        assert!(game.game_over);
        assert_eq!(game.score, grid_sum(&game.grid));
    }

    #[test]
    fn test_moves_ignored_after_game_over() {
        let mut game = game_with([[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        game.game_over = true;
        let before = game.clone();
        let mut rng = create_test_rng();

        assert_eq!(apply_move(game, Direction::Left, &mut rng), before);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut game = game_with([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        game.game_over = true;
        game.score = 48;
        let mut rng = create_test_rng();

        let game = process_input(game, GameInput::Restart, &mut rng);

        assert!(!game.game_over);
        assert_eq!(game.score, 0);
        assert_eq!(game.tile_count(), 2);
    }
}
