//! Snake: steer a growing snake around a walled board.

pub mod logic;
pub mod types;

pub use logic::{process_input, reset, set_direction, start, start_snake_game, tick};
pub use types::{CrashCause, Position, SnakeGame, SnakeStatus};
