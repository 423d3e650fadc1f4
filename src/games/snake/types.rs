//! Snake game data structures.
//!
//! The player steers a snake around a walled 40x20 board, eating food to grow.
//! Each meal shortens the tick interval until it bottoms out.

use crate::core::constants::{
    SNAKE_BOARD_HEIGHT, SNAKE_BOARD_WIDTH, SNAKE_INITIAL_SPEED_MS, SNAKE_MIN_SPEED_MS,
    SNAKE_SPEED_STEP_MS,
};
use crate::games::Direction;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A position on the grid, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn in_bounds(self, width: i16, height: i16) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

/// Round lifecycle: `NotStarted -> Running -> GameOver -> (reset) -> Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeStatus {
    NotStarted,
    Running,
    GameOver,
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Wall,
    SelfCollision,
    /// The snake filled every cell, leaving nowhere to place food.
    BoardFull,
}

/// Main game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeGame {
    pub status: SnakeStatus,
    pub crash: Option<CrashCause>,

    pub grid_width: i16,
    pub grid_height: i16,

    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Position>,
    pub direction: Direction,

    pub food: Position,
    pub score: u32,

    /// Tick interval in milliseconds.
    pub speed_ms: u64,
    /// Movement steps taken this round.
    pub tick_count: u64,
}

/// The three-segment body every round starts with, head first.
pub fn initial_body() -> VecDeque<Position> {
    VecDeque::from([
        Position::new(5, 10),
        Position::new(4, 10),
        Position::new(3, 10),
    ])
}

impl SnakeGame {
    /// Create a game waiting on its start screen.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let snake = initial_body();
        let food = spawn_food(&snake, SNAKE_BOARD_WIDTH, SNAKE_BOARD_HEIGHT, rng)
            .unwrap_or(Position::new(0, 0));

        Self {
            status: SnakeStatus::NotStarted,
            crash: None,
            grid_width: SNAKE_BOARD_WIDTH,
            grid_height: SNAKE_BOARD_HEIGHT,
            snake,
            direction: Direction::Right,
            food,
            score: 0,
            speed_ms: SNAKE_INITIAL_SPEED_MS,
            tick_count: 0,
        }
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn is_started(&self) -> bool {
        self.status != SnakeStatus::NotStarted
    }

    pub fn is_running(&self) -> bool {
        self.status == SnakeStatus::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.status == SnakeStatus::GameOver
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }
}

/// The interval after one more meal: 5ms faster, never below 60ms.
pub fn next_speed(speed_ms: u64) -> u64 {
    if speed_ms > SNAKE_MIN_SPEED_MS {
        speed_ms
            .saturating_sub(SNAKE_SPEED_STEP_MS)
            .max(SNAKE_MIN_SPEED_MS)
    } else {
        speed_ms
    }
}

/// Pick a uniformly random cell not covered by `snake`.
///
/// Returns `None` when the snake covers the whole board.
pub fn spawn_food<R: Rng>(
    snake: &VecDeque<Position>,
    width: i16,
    height: i16,
    rng: &mut R,
) -> Option<Position> {
    let empty: Vec<Position> = (0..height)
        .flat_map(|y| (0..width).map(move |x| Position::new(x, y)))
        .filter(|pos| !snake.contains(pos))
        .collect();

    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.gen_range(0..empty.len())])
}
