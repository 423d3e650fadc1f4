//! Bounded in-session event log shown in each game's info panel.

use crate::core::constants::EVENT_LOG_CAPACITY;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Colour class of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Good,
    Bad,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
    pub at: DateTime<Local>,
}

impl LogEntry {
    /// `HH:MM:SS` timestamp for display.
    pub fn time_label(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_log_entry(&mut self, message: String, kind: LogKind) {
        // Keep only the newest entries
        if self.entries.len() >= EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            message,
            kind,
            at: Local::now(),
        });
    }

    /// Oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
