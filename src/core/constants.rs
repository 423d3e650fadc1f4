// Snake board
pub const SNAKE_BOARD_WIDTH: i16 = 40;
pub const SNAKE_BOARD_HEIGHT: i16 = 20;

// Snake timing (tick interval in ms, lower = faster)
pub const SNAKE_INITIAL_SPEED_MS: u64 = 150;
pub const SNAKE_SPEED_STEP_MS: u64 = 5;
pub const SNAKE_MIN_SPEED_MS: u64 = 60;

// 2048 grid
pub const GRID_SIZE: usize = 4;
pub const SPAWN_TWO_CHANCE: f64 = 0.9;
pub const WINNING_TILE: u32 = 2048;

// Event log
pub const EVENT_LOG_CAPACITY: usize = 8;

// Real-time frame rate for the main loop
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
