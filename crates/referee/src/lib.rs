//! Command-line referee for `chess_rules`
//!
//! This crate provides:
//! - TOML configuration with built-in defaults
//! - Loading and saving game records as JSON
//! - Text reports of a game's board and history
//! - Random self-play that drives games through the move-text interface
//!
//! # Usage
//!
//! ```bash
//! # Replay a stored game up to its tenth move
//! cargo run -p referee -- replay game.json --upto 10
//!
//! # Play at the terminal and keep the record
//! cargo run -p referee -- play --save game.json
//!
//! # Fifty seeded random games
//! cargo run -p referee -- selfplay --games 50 --seed 7
//! ```

mod config;
mod record;
mod report;
mod selfplay;

pub use config::*;
pub use record::*;
pub use report::*;
pub use selfplay::*;
