//! Session state: the active game, menu cursor, event log and tick schedule.
//!
//! The session is the single owner of the live game. Every transition moves
//! the game out, runs it through a pure transition function and stores the
//! result, then logs what changed and re-syncs the tick scheduler.

use crate::core::constants::WINNING_TILE;
use crate::core::event_log::{EventLog, LogKind};
use crate::core::scheduler::TickScheduler;
use crate::games::snake::CrashCause;
use crate::games::{apply_input, apply_tick, ActiveGame, GameInput, GameKind, SnakeStatus};
use rand::Rng;
use std::time::{Duration, Instant};

/// What the host should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    /// The player left the game for the menu.
    BackToMenu,
    /// The player asked to quit from the menu.
    Quit,
}

/// The handful of values compared before and after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    score: u32,
    game_over: bool,
    snake_status: Option<SnakeStatus>,
    speed_ms: Option<u64>,
    best_tile: Option<u32>,
}

impl Snapshot {
    fn of(game: &ActiveGame) -> Self {
        match game {
            ActiveGame::Snake(g) => Self {
                score: g.score,
                game_over: g.is_game_over(),
                snake_status: Some(g.status),
                speed_ms: Some(g.speed_ms),
                best_tile: None,
            },
            ActiveGame::TwentyFortyEight(g) => Self {
                score: g.score,
                game_over: g.game_over,
                snake_status: None,
                speed_ms: None,
                best_tile: Some(g.best_tile()),
            },
        }
    }
}

pub struct Session<R: Rng> {
    pub active: Option<ActiveGame>,
    pub menu_index: usize,
    pub log: EventLog,
    pub scheduler: TickScheduler,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R) -> Self {
        Self {
            active: None,
            menu_index: 0,
            log: EventLog::new(),
            scheduler: TickScheduler::new(),
            rng,
        }
    }

    pub fn selected_kind(&self) -> GameKind {
        GameKind::ALL
            .get(self.menu_index)
            .copied()
            .unwrap_or(GameKind::Snake)
    }

    pub fn menu_up(&mut self) {
        self.menu_index = self.menu_index.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        if self.menu_index + 1 < GameKind::ALL.len() {
            self.menu_index += 1;
        }
    }

    /// Open a fresh game of `kind`, replacing whatever was on screen.
    pub fn launch(&mut self, kind: GameKind, now: Instant) {
        self.log.clear();
        let game = ActiveGame::new(kind, &mut self.rng);
        match kind {
            GameKind::Snake => self
                .log
                .add_log_entry("Press Space to start.".to_string(), LogKind::Info),
            GameKind::TwentyFortyEight => self
                .log
                .add_log_entry("New grid dealt.".to_string(), LogKind::Info),
        }
        if let Some(index) = GameKind::ALL.iter().position(|k| *k == kind) {
            self.menu_index = index;
        }
        self.active = Some(game);
        self.resync(now, true);
    }

    pub fn leave_game(&mut self) {
        self.active = None;
        self.scheduler.cancel();
    }

    /// Feed one input to the active game.
    pub fn handle_game_input(&mut self, input: GameInput, now: Instant) -> InputResult {
        if input == GameInput::Back {
            self.leave_game();
            return InputResult::BackToMenu;
        }

        let Some(game) = self.active.take() else {
            return InputResult::Continue;
        };
        let before = Snapshot::of(&game);
        let game = apply_input(game, input, &mut self.rng);
        self.log_transition(before, &game);
        self.active = Some(game);
        self.resync(now, false);
        InputResult::Continue
    }

    /// Run a scheduled tick if one is due. Returns true if the game advanced.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        if !self.scheduler.is_due(now) {
            return false;
        }
        let Some(game) = self.active.take() else {
            self.scheduler.cancel();
            return false;
        };
        let before = Snapshot::of(&game);
        let game = apply_tick(game, &mut self.rng);
        self.log_transition(before, &game);
        self.active = Some(game);
        self.resync(now, true);
        true
    }

    /// Re-arm, reset or cancel the tick schedule to match the active game.
    ///
    /// `after_tick` re-arms unconditionally; otherwise a pending tick keeps
    /// its deadline unless the interval changed.
    fn resync(&mut self, now: Instant, after_tick: bool) {
        let (interval, running) = match &self.active {
            Some(ActiveGame::Snake(g)) => (Duration::from_millis(g.speed_ms), g.is_running()),
            _ => (Duration::ZERO, false),
        };
        if after_tick {
            self.scheduler.sync(interval, running, now);
        } else {
            self.scheduler.sync_if_changed(interval, running, now);
        }
    }

    fn log_transition(&mut self, before: Snapshot, game: &ActiveGame) {
        let after = Snapshot::of(game);
        if after == before {
            return;
        }

        // A restart shows up as a game-over flag clearing
        if before.game_over && !after.game_over {
            self.log
                .add_log_entry("New round.".to_string(), LogKind::Info);
            return;
        }

        match game {
            ActiveGame::Snake(g) => {
                if before.snake_status == Some(SnakeStatus::NotStarted)
                    && after.snake_status == Some(SnakeStatus::Running)
                {
                    self.log.add_log_entry("Go!".to_string(), LogKind::Info);
                }
                if after.score > before.score {
                    self.log
                        .add_log_entry(format!("Food eaten ({})", g.score), LogKind::Good);
                    if after.speed_ms != before.speed_ms {
                        self.log.add_log_entry(
                            format!("Speed up: {}ms", g.speed_ms),
                            LogKind::Info,
                        );
                    }
                }
                if after.game_over && !before.game_over {
                    let cause = match g.crash {
                        Some(CrashCause::Wall) => "Hit the wall",
                        Some(CrashCause::SelfCollision) => "Bit your own tail",
                        Some(CrashCause::BoardFull) => "No room left",
                        None => "Game over",
                    };
                    self.log.add_log_entry(
                        format!("{}! Final score {}", cause, g.score),
                        LogKind::Bad,
                    );
                }
            }
            ActiveGame::TwentyFortyEight(g) => {
                let best_before = before.best_tile.unwrap_or(0);
                let best_after = after.best_tile.unwrap_or(0);
                if best_after > best_before && best_after >= 64 {
                    let kind = if best_after >= WINNING_TILE {
                        LogKind::Good
                    } else {
                        LogKind::Info
                    };
                    self.log
                        .add_log_entry(format!("New best tile: {}", best_after), kind);
                }
                if after.game_over && !before.game_over {
                    self.log.add_log_entry(
                        format!("No moves left! Final score {}", g.score),
                        LogKind::Bad,
                    );
                }
            }
        }
    }
}
