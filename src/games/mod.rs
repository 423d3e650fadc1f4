//! Arcade games: Snake and 2048.
//!
//! Each game is a plain state struct plus transition functions that consume
//! the current state and return the next one. The host keeps the only live
//! instance in [`ActiveGame`].

pub mod snake;
pub mod twenty48;

pub use snake::{SnakeGame, SnakeStatus};
pub use twenty48::Game2048;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Cardinal direction shared by both games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction. Down is +y.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// True when the two deltas cancel out on both axes.
    pub fn is_opposite(&self, other: Direction) -> bool {
        let (ax, ay) = self.delta();
        let (bx, by) = other.delta();
        ax + bx == 0 && ay + by == 0
    }
}

/// UI-agnostic input actions. Key mapping lives in `input.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Move(Direction),
    Select,  // Space / Enter: start a waiting game
    Restart, // R: new round once the current one is over
    Back,    // Esc: leave to the menu
    Other,
}

/// Which game a menu entry launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKind {
    Snake,
    TwentyFortyEight,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::Snake, GameKind::TwentyFortyEight];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Snake => "Snake",
            Self::TwentyFortyEight => "2048",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Snake => "~",
            Self::TwentyFortyEight => "#",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Snake => "Eat the food, grow longer, stay off the walls and your own tail.",
            Self::TwentyFortyEight => "Slide the tiles; equal tiles merge. Keep the grid from filling up.",
        }
    }

    /// Parse a CLI argument such as `snake` or `2048`.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "snake" => Some(Self::Snake),
            "2048" | "twenty48" => Some(Self::TwentyFortyEight),
            _ => None,
        }
    }
}

/// The game currently on screen. Only one can be active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveGame {
    Snake(SnakeGame),
    TwentyFortyEight(Game2048),
}

impl ActiveGame {
    pub fn new<R: Rng>(kind: GameKind, rng: &mut R) -> Self {
        match kind {
            GameKind::Snake => ActiveGame::Snake(snake::start_snake_game(rng)),
            GameKind::TwentyFortyEight => {
                ActiveGame::TwentyFortyEight(twenty48::start_2048_game(rng))
            }
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Snake(_) => GameKind::Snake,
            ActiveGame::TwentyFortyEight(_) => GameKind::TwentyFortyEight,
        }
    }

    pub fn is_game_over(&self) -> bool {
        match self {
            ActiveGame::Snake(g) => g.is_game_over(),
            ActiveGame::TwentyFortyEight(g) => g.game_over,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            ActiveGame::Snake(g) => g.score,
            ActiveGame::TwentyFortyEight(g) => g.score,
        }
    }
}

/// Dispatch an input to the active game's transition function.
pub fn apply_input<R: Rng>(game: ActiveGame, input: GameInput, rng: &mut R) -> ActiveGame {
    match game {
        ActiveGame::Snake(g) => ActiveGame::Snake(snake::process_input(g, input, rng)),
        ActiveGame::TwentyFortyEight(g) => {
            ActiveGame::TwentyFortyEight(twenty48::process_input(g, input, rng))
        }
    }
}

/// Advance a real-time game by one step. Turn-based games pass through.
pub fn apply_tick<R: Rng>(game: ActiveGame, rng: &mut R) -> ActiveGame {
    match game {
        ActiveGame::Snake(g) => ActiveGame::Snake(snake::tick(g, rng)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_is_opposite_matches_delta_negation() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                assert_eq!(a.is_opposite(b), b == a.opposite(), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_game_kind_from_arg() {
        assert_eq!(GameKind::from_arg("snake"), Some(GameKind::Snake));
        assert_eq!(GameKind::from_arg("SNAKE"), Some(GameKind::Snake));
        assert_eq!(GameKind::from_arg("2048"), Some(GameKind::TwentyFortyEight));
        assert_eq!(GameKind::from_arg("tetris"), None);
    }

    #[test]
    fn test_active_game_kind_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for kind in GameKind::ALL {
            let game = ActiveGame::new(kind, &mut rng);
            assert_eq!(game.kind(), kind);
            assert!(!game.is_game_over());
            assert_eq!(game.score(), 0);
        }
    }

    #[test]
    fn test_tick_passes_2048_through() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let game = ActiveGame::new(GameKind::TwentyFortyEight, &mut rng);
        let before = game.clone();
        assert_eq!(apply_tick(game, &mut rng), before);
    }

    #[test]
    fn test_apply_input_dispatches_to_snake() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let game = ActiveGame::new(GameKind::Snake, &mut rng);

        let game = apply_input(game, GameInput::Select, &mut rng);
        let game = apply_input(game, GameInput::Move(Direction::Up), &mut rng);

        match game {
            ActiveGame::Snake(g) => {
                assert!(g.is_running());
                assert_eq!(g.direction, Direction::Up);
            }
            other => panic!("expected snake, got {:?}", other.kind()),
        }
    }
}
