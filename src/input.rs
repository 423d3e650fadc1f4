//! Input handling: key mapping and the menu/game dispatch chain.

use crate::core::session::{InputResult, Session};
use crate::games::{Direction, GameInput};
use crate::utils::config::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use std::time::Instant;

/// Map a key to a direction. Arrows always; w/a/s/d when enabled.
pub fn direction_for_key(code: KeyCode, wasd_keys: bool) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char(c) if wasd_keys => match c.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        },
        _ => None,
    }
}

/// Unified key -> GameInput mapping used by both games.
pub fn map_game_key(code: KeyCode, settings: &Settings) -> GameInput {
    if let Some(direction) = direction_for_key(code, settings.wasd_keys) {
        return GameInput::Move(direction);
    }
    match code {
        KeyCode::Char(' ') | KeyCode::Enter => GameInput::Select,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Esc => GameInput::Back,
        _ => GameInput::Other,
    }
}

/// Main dispatcher for a key event. Handles the priority chain.
pub fn handle_key<R: Rng>(
    key: KeyEvent,
    session: &mut Session<R>,
    settings: &Settings,
    now: Instant,
) -> InputResult {
    // Windows terminals report releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // 1. Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    // 2. Active game
    if session.active.is_some() {
        let input = map_game_key(key.code, settings);
        return session.handle_game_input(input, now);
    }

    // 3. Game select menu
    handle_menu(key, session, now)
}

fn handle_menu<R: Rng>(key: KeyEvent, session: &mut Session<R>, now: Instant) -> InputResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => session.menu_up(),
        KeyCode::Down | KeyCode::Char('j') => session.menu_down(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let kind = session.selected_kind();
            session.launch(kind, now);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}
