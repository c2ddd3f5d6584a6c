//! Referee configuration, read from TOML.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "referee.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefereeConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub players: PlayersConfig,
    pub selfplay: SelfPlayConfig,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            players: PlayersConfig::default(),
            selfplay: SelfPlayConfig::default(),
        }
    }
}

/// Display names for locally hosted games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub white: String,
    pub black: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            white: "White".to_string(),
            black: "Black".to_string(),
        }
    }
}

/// Random self-play settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub games: u32,
    /// Plies per game before it is abandoned as unfinished.
    pub max_moves: u32,
    /// Fixed seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_moves: 300,
            seed: None,
        }
    }
}

impl RefereeConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid referee config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
