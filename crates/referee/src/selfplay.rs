//! Random self-play between two players that always pick a legal move.
//!
//! Every move goes through [`Game::submit`] as text, so playouts exercise the
//! same path a human player's input takes.

use anyhow::Context;
use chess_rules::{Color, Game, GameStatus, LegalMove, Player, legal_moves};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::SelfPlayConfig;

const WHITE_ID: i64 = 1;
const BLACK_ID: i64 = 2;

/// Aggregate results of a self-play run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelfPlaySummary {
    pub games: u32,
    pub white_wins: u32,
    pub black_wins: u32,
    pub stalemates: u32,
    /// Games cut off at the move limit.
    pub unfinished: u32,
    pub plies: u64,
}

pub struct SelfPlayRunner {
    config: SelfPlayConfig,
    rng: StdRng,
}

impl SelfPlayRunner {
    pub fn new(config: SelfPlayConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn run(&mut self) -> anyhow::Result<SelfPlaySummary> {
        let mut summary = SelfPlaySummary::default();

        for game_num in 0..self.config.games {
            let game = self
                .play_game()
                .with_context(|| format!("self-play game {} failed", game_num + 1))?;

            summary.games += 1;
            summary.plies += game.moves().len() as u64;
            match (game.status(), game.board().winner()) {
                (GameStatus::Ongoing, _) => summary.unfinished += 1,
                (GameStatus::Finished(_), Some(Color::White)) => summary.white_wins += 1,
                (GameStatus::Finished(_), Some(Color::Black)) => summary.black_wins += 1,
                (GameStatus::Finished(_), None) => summary.stalemates += 1,
            }

            info!(
                game = game_num + 1,
                of = self.config.games,
                plies = game.moves().len(),
                result = %outcome_label(&game),
                "self-play game done"
            );
        }

        Ok(summary)
    }

    /// Play one game to the end or to the move limit.
    pub fn play_game(&mut self) -> anyhow::Result<Game> {
        let mut game = Game::new(
            Player::new(WHITE_ID, "random-white"),
            Player::new(BLACK_ID, "random-black"),
        );

        for _ in 0..self.config.max_moves {
            let moves = legal_moves(game.board());
            let Some(pick) = moves.choose(&mut self.rng).copied() else {
                break;
            };
            let text = move_text(pick);
            let elapsed_ms = self.rng.gen_range(50..2_000);
            let player_id = game.player_to_move().id;
            let mv = game
                .submit(&text, player_id, elapsed_ms)
                .with_context(|| format!("generated move '{text}' was refused"))?;
            debug!(%mv, "self-play move");
        }

        Ok(game)
    }
}

fn move_text(mv: LegalMove) -> String {
    match mv.promotion {
        Some(kind) => format!("{} {} {}", mv.from, mv.to, kind),
        None => format!("{} {}", mv.from, mv.to),
    }
}

fn outcome_label(game: &Game) -> String {
    match game.status() {
        GameStatus::Ongoing => "unfinished".to_string(),
        GameStatus::Finished(reason) => match game.board().winner() {
            Some(color) => format!("{} ({color} wins)", reason.description()),
            None => reason.description(),
        },
    }
}

#[cfg(test)]
#[path = "selfplay_tests.rs"]
mod selfplay_tests;
