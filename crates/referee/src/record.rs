//! Game records stored as pretty JSON.

use std::path::Path;

use anyhow::Context;
use chess_rules::{Game, GameRecord};

pub fn save_record(game: &Game, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&game.record()).context("failed to serialize record")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

pub fn load_record(path: &Path) -> anyhow::Result<GameRecord> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load a record and replay it into a live game.
pub fn load_game(path: &Path) -> anyhow::Result<Game> {
    let record = load_record(path)?;
    Game::from_record(record).with_context(|| format!("record {} does not replay", path.display()))
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
