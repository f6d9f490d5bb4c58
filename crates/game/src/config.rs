//! Game settings persistence

use std::path::Path;

use chess_core::Color;
use serde::{Deserialize, Serialize};

/// Settings for a human-versus-engine game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Search depth in plies. Search cost grows exponentially with depth
    /// times the branching factor, so every extra ply is a large latency
    /// multiplier.
    pub search_depth: u8,
    /// Engine color; the human plays the other side.
    pub engine_plays_white: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: minimax_engine::DEFAULT_DEPTH,
            engine_plays_white: false,
        }
    }
}

impl GameConfig {
    pub fn engine_side(&self) -> Color {
        if self.engine_plays_white {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write config file: {}", e))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
