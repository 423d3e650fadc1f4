//! Snake game logic: steering, movement, collision detection.
//!
//! Every transition takes the game by value and hands back the next state.

use super::types::*;
use crate::games::{Direction, GameInput};
use rand::Rng;

/// Create a new game waiting on its start screen.
pub fn start_snake_game<R: Rng>(rng: &mut R) -> SnakeGame {
    SnakeGame::new(rng)
}

/// Leave the start screen. Has no effect once the round is under way.
pub fn start(mut game: SnakeGame) -> SnakeGame {
    if game.status == SnakeStatus::NotStarted {
        game.status = SnakeStatus::Running;
    }
    game
}

/// Steer the snake. A request for the exact opposite of the current heading
/// would turn the head into its own neck and is ignored.
pub fn set_direction(mut game: SnakeGame, requested: Direction) -> SnakeGame {
    if game.is_game_over() {
        return game;
    }
    if !requested.is_opposite(game.direction) {
        game.direction = requested;
    }
    game
}

/// Advance one movement step. Only a running game moves.
pub fn tick<R: Rng>(mut game: SnakeGame, rng: &mut R) -> SnakeGame {
    if !game.is_running() {
        return game;
    }

    let new_head = game.head().step(game.direction);

    if !new_head.in_bounds(game.grid_width, game.grid_height) {
        return crash(game, CrashCause::Wall);
    }

    // The tail still counts: it has not moved out of the way yet.
    if game.occupies(new_head) {
        return crash(game, CrashCause::SelfCollision);
    }

    game.tick_count += 1;
    game.snake.push_front(new_head);

    if new_head == game.food {
        game.score += 1;
        game.speed_ms = next_speed(game.speed_ms);
        match spawn_food(&game.snake, game.grid_width, game.grid_height, rng) {
            Some(food) => game.food = food,
            None => return crash(game, CrashCause::BoardFull),
        }
    } else {
        game.snake.pop_back();
    }

    game
}

fn crash(mut game: SnakeGame, cause: CrashCause) -> SnakeGame {
    game.status = SnakeStatus::GameOver;
    game.crash = Some(cause);
    game
}

/// Start a fresh round immediately (no start screen).
pub fn reset<R: Rng>(rng: &mut R) -> SnakeGame {
    start(SnakeGame::new(rng))
}

/// Route a UI-agnostic input to the matching transition.
pub fn process_input<R: Rng>(game: SnakeGame, input: GameInput, rng: &mut R) -> SnakeGame {
    match input {
        GameInput::Move(direction) => set_direction(game, direction),
        GameInput::Select if game.status == SnakeStatus::NotStarted => start(game),
        GameInput::Select | GameInput::Restart if game.is_game_over() => reset(rng),
        _ => game,
    }
}
