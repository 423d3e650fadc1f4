//! Arcade - Terminal Snake and 2048
//!
//! This module exposes the game logic for testing and external use.

pub mod core;
pub mod games;
pub mod input;
pub mod ui;
pub mod utils;
