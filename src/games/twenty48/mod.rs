//! 2048: slide and merge numbered tiles on a 4x4 grid.

pub mod logic;
pub mod types;

pub use logic::{
    apply_move, check_game_over, collapse_row_left, process_input, reset, slide,
    start_2048_game,
};
pub use types::{Game2048, Grid};
