//! User settings loaded from ~/.arcade/config.json.
//!
//! Every field has a default, so a missing file, a partial file, or a
//! malformed file all produce a usable configuration.

use super::persistence::{load_json_or_default, save_json};
use crate::core::constants::REALTIME_FRAME_MS;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Accept w/a/s/d alongside the arrow keys.
    pub wasd_keys: bool,
    /// Main loop poll interval in milliseconds.
    pub frame_ms: u64,
    /// Show the event log in the info panel.
    pub show_log: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wasd_keys: true,
            frame_ms: REALTIME_FRAME_MS,
            show_log: true,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        load_json_or_default::<Settings>(CONFIG_FILE).sanitized()
    }

    /// Write the current settings out, returning the file path.
    pub fn save(&self) -> io::Result<PathBuf> {
        save_json(CONFIG_FILE, self)
    }

    /// Clamp values a hand-edited file could set out of range.
    pub fn sanitized(mut self) -> Self {
        self.frame_ms = self.frame_ms.clamp(1, 100);
        self
    }
}
