pub mod game_common;
pub mod menu_scene;
pub mod snake_scene;
pub mod twenty48_scene;

use crate::core::session::Session;
use crate::games::ActiveGame;
use crate::utils::config::Settings;
use rand::Rng;
use ratatui::Frame;

/// Main UI drawing function: the active game, or the menu when none is running.
pub fn draw_ui<R: Rng>(frame: &mut Frame, session: &Session<R>, settings: &Settings) {
    let size = frame.size();

    match &session.active {
        Some(ActiveGame::Snake(game)) => {
            snake_scene::render_snake_scene(frame, size, game, &session.log, settings.show_log)
        }
        Some(ActiveGame::TwentyFortyEight(game)) => {
            twenty48_scene::render_2048_scene(frame, size, game, &session.log, settings.show_log)
        }
        None => menu_scene::render_game_menu(frame, size, session.menu_index),
    }
}
