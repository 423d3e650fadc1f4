//! Integration test: 2048 game flow
//!
//! Plays whole games through the public move API and checks the grid
//! invariants that must hold after every accepted move.

use arcade::core::{LogKind, Session};
use arcade::games::twenty48::{apply_move, process_input, start_2048_game, Game2048, Grid};
use arcade::games::{ActiveGame, Direction, GameInput, GameKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2048)
}

fn game_with(grid: Grid, rng: &mut ChaCha8Rng) -> Game2048 {
    let mut game = start_2048_game(rng);
    game.grid = grid;
    game
}

fn grid_sum(grid: &Grid) -> u32 {
    grid.iter().flatten().sum()
}

const TERMINAL_AFTER_RIGHT: Grid = [
    [2, 8, 16, 32],
    [64, 128, 256, 512],
    [8, 2, 16, 32],
    [64, 128, 256, 0],
];

#[test]
fn test_new_game_has_two_small_tiles() {
    let mut rng = create_test_rng();
    let game = start_2048_game(&mut rng);

    let tiles: Vec<u32> = game.grid.iter().flatten().copied().filter(|&v| v != 0).collect();
    assert_eq!(tiles.len(), 2);
    assert!(tiles.iter().all(|&v| v == 2 || v == 4));
    assert_eq!(game.score, 0);
    assert_eq!(game.moves, 0);
    assert!(!game.game_over);
}

#[test]
fn test_merge_then_spawn_one_tile() {
    let mut rng = create_test_rng();
    let game = game_with(
        [[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        &mut rng,
    );

    let game = apply_move(game, Direction::Left, &mut rng);

    assert_eq!(game.grid[0][0], 4);
    assert_eq!(game.tile_count(), 2);
    assert_eq!(game.moves, 1);
    assert_eq!(game.score, grid_sum(&game.grid));
}

#[test]
fn test_blocked_move_changes_nothing() {
    let mut rng = create_test_rng();
    let game = game_with(
        [[2, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        &mut rng,
    );

    let after = apply_move(game.clone(), Direction::Left, &mut rng);

    assert_eq!(after, game);
}

#[test]
fn test_game_over_freezes_until_restart() {
    let mut rng = create_test_rng();
    let game = game_with(TERMINAL_AFTER_RIGHT, &mut rng);

    let game = apply_move(game, Direction::Right, &mut rng);
    assert!(game.game_over);
    assert_eq!(game.score, grid_sum(&game.grid));

    let frozen = process_input(game.clone(), GameInput::Move(Direction::Left), &mut rng);
    assert_eq!(frozen, game);

    let fresh = process_input(frozen, GameInput::Restart, &mut rng);
    assert!(!fresh.game_over);
    assert_eq!(fresh.score, 0);
    assert_eq!(fresh.moves, 0);
    assert_eq!(fresh.tile_count(), 2);
}

#[test]
fn test_long_game_keeps_invariants() {
    let mut rng = create_test_rng();
    let mut game = start_2048_game(&mut rng);

    for step in 0..2000 {
        if game.game_over {
            break;
        }
        let direction = Direction::ALL[step % Direction::ALL.len()];
        let before = game.clone();
        game = apply_move(game, direction, &mut rng);

        if game == before {
            continue;
        }
        assert_eq!(game.moves, before.moves + 1);
        assert_eq!(game.score, grid_sum(&game.grid));
        assert!(game
            .grid
            .iter()
            .flatten()
            .all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())));
        assert!(game.score >= grid_sum(&before.grid));
    }
}

#[test]
fn test_session_never_schedules_ticks() {
    let mut session = Session::new(create_test_rng());
    let now = Instant::now();
    session.launch(GameKind::TwentyFortyEight, now);
    if let Some(ActiveGame::TwentyFortyEight(game)) = session.active.as_mut() {
        game.grid = [[32, 32, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
    }

    session.handle_game_input(GameInput::Move(Direction::Left), now);

    assert!(!session.scheduler.is_armed());
    assert!(!session.poll_tick(now));
    let last = session.log.last().expect("best tile should be logged");
    assert_eq!(last.message, "New best tile: 64");
    assert_eq!(last.kind, LogKind::Info);
}
