//! Core session plumbing shared by both games.

pub mod constants;
pub mod event_log;
pub mod scheduler;
pub mod session;

pub use constants::*;
pub use event_log::{EventLog, LogEntry, LogKind};
pub use scheduler::TickScheduler;
pub use session::{InputResult, Session};
