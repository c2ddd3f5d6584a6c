//! Session wrapper: two players, the ordered history and the ways a game ends
//! besides checkmate and stalemate.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::error::{GameError, MoveError, ReplayError};
use crate::movegen::legal_destinations;
use crate::notation::MoveInput;
use crate::types::{Color, Move, MoveMeta, Square};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
}

impl Player {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Why a game is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "color", rename_all = "snake_case")]
pub enum FinishReason {
    Checkmate,
    Stalemate,
    /// The color that resigned.
    Resignation(Color),
    DrawAgreed,
}

impl FinishReason {
    pub fn description(self) -> String {
        match self {
            FinishReason::Checkmate => "Checkmate".to_string(),
            FinishReason::Stalemate => "Stalemate".to_string(),
            FinishReason::Resignation(color) => format!("{color} Resigned"),
            FinishReason::DrawAgreed => "Players agreed a Draw".to_string(),
        }
    }

    /// Reasons the rules cannot derive from the move list alone.
    pub fn is_external(self) -> bool {
        matches!(self, FinishReason::Resignation(_) | FinishReason::DrawAgreed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished(FinishReason),
}

/// The durable shape of a game: players, committed moves and, when the game
/// ended outside the rules, how.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: Player,
    pub black: Player,
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default)]
    pub outcome: Option<FinishReason>,
}

/// Milliseconds spent per side, summed from move metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTotals {
    pub white_ms: u64,
    pub black_ms: u64,
}

#[derive(Clone, Debug)]
pub struct Game {
    white: Player,
    black: Player,
    board: Board,
    moves: Vec<Move>,
    outcome: Option<FinishReason>,
    draw_offer: Option<i64>,
}

impl Game {
    pub fn new(white: Player, black: Player) -> Self {
        Self {
            white,
            black,
            board: Board::new(),
            moves: Vec::new(),
            outcome: None,
            draw_offer: None,
        }
    }

    /// Rebuild a game by replaying its stored history.
    pub fn from_record(record: GameRecord) -> Result<Self, ReplayError> {
        let mut board = Board::from_moves(&record.moves)?;
        let outcome = match record.outcome {
            Some(reason) if reason.is_external() && !board.is_finished() => {
                board
                    .finish(external_winner(reason), reason.description())
                    .map_err(|source| ReplayError::Move {
                        index: record.moves.len(),
                        source,
                    })?;
                Some(reason)
            }
            Some(reason) => {
                let derived = board.is_finished().then(|| match board.winner() {
                    Some(_) => FinishReason::Checkmate,
                    None => FinishReason::Stalemate,
                });
                if derived != Some(reason) {
                    warn!(
                        stored = ?reason,
                        finished = board.is_finished(),
                        "stored outcome contradicts the replayed history, ignoring it"
                    );
                }
                None
            }
            None => None,
        };
        Ok(Self {
            white: record.white,
            black: record.black,
            board,
            moves: record.moves,
            outcome,
            draw_offer: None,
        })
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            white: self.white.clone(),
            black: self.black.clone(),
            moves: self.moves.clone(),
            outcome: self.outcome,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn white(&self) -> &Player {
        &self.white
    }

    pub fn black(&self) -> &Player {
        &self.black
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn player_to_move(&self) -> &Player {
        self.player(self.board.turn())
    }

    pub fn winner(&self) -> Option<&Player> {
        self.board.winner().map(|color| self.player(color))
    }

    pub fn draw_offer(&self) -> Option<i64> {
        self.draw_offer
    }

    pub fn status(&self) -> GameStatus {
        if !self.board.is_finished() {
            return GameStatus::Ongoing;
        }
        let reason = self.outcome.unwrap_or(if self.board.winner().is_some() {
            FinishReason::Checkmate
        } else {
            FinishReason::Stalemate
        });
        GameStatus::Finished(reason)
    }

    fn color_of(&self, player_id: i64) -> Result<Color, GameError> {
        if player_id == self.white.id {
            Ok(Color::White)
        } else if player_id == self.black.id {
            Ok(Color::Black)
        } else {
            Err(GameError::NotAParticipant(player_id))
        }
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        if self.board.is_finished() {
            return Err(MoveError::GameAlreadyOver {
                winner: self.board.winner(),
            }
            .into());
        }
        Ok(())
    }

    /// Commit a move and append it to the history. `meta.order` is
    /// overwritten with the move's index.
    pub fn apply_move(&mut self, input: MoveInput, mut meta: MoveMeta) -> Result<Move, MoveError> {
        meta.order = self.moves.len() as u32;
        let mv = self
            .board
            .play(input.from, input.to, input.promotion, meta)?;
        self.moves.push(mv);
        self.draw_offer = None;
        Ok(mv)
    }

    /// Parse `text` and play it for `player_id`, who must be the player to move.
    pub fn submit(
        &mut self,
        text: &str,
        player_id: i64,
        elapsed_ms: u64,
    ) -> Result<Move, GameError> {
        let input: MoveInput = text.parse()?;
        let color = self.color_of(player_id)?;
        self.ensure_ongoing()?;
        if color != self.board.turn() {
            return Err(GameError::NotYourTurn);
        }
        let meta = MoveMeta {
            player_id,
            time_ms: elapsed_ms,
            order: 0,
        };
        Ok(self.apply_move(input, meta)?)
    }

    pub fn resign(&mut self, color: Color) -> Result<(), GameError> {
        self.end(FinishReason::Resignation(color))
    }

    pub fn offer_draw(&mut self, player_id: i64) -> Result<(), GameError> {
        self.color_of(player_id)?;
        self.ensure_ongoing()?;
        debug!(player_id, "draw offered");
        self.draw_offer = Some(player_id);
        Ok(())
    }

    /// Accept the pending offer. Only the other player may accept it.
    pub fn accept_draw(&mut self, player_id: i64) -> Result<(), GameError> {
        self.color_of(player_id)?;
        self.ensure_ongoing()?;
        match self.draw_offer {
            None => Err(GameError::NoDrawOffer),
            Some(offerer) if offerer == player_id => Err(GameError::OwnDrawOffer),
            Some(_) => self.end(FinishReason::DrawAgreed),
        }
    }

    pub fn refuse_draw(&mut self) -> Result<(), GameError> {
        match self.draw_offer.take() {
            Some(_) => Ok(()),
            None => Err(GameError::NoDrawOffer),
        }
    }

    fn end(&mut self, reason: FinishReason) -> Result<(), GameError> {
        self.board
            .finish(external_winner(reason), reason.description())?;
        info!(reason = ?reason, "game ended outside the rules");
        self.outcome = Some(reason);
        self.draw_offer = None;
        Ok(())
    }

    pub fn clock_totals(&self) -> ClockTotals {
        let mut totals = ClockTotals::default();
        for (i, mv) in self.moves.iter().enumerate() {
            if i % 2 == 0 {
                totals.white_ms += mv.meta.time_ms;
            } else {
                totals.black_ms += mv.meta.time_ms;
            }
        }
        totals
    }

    /// The board as it stood after the first `n` moves, for stepping through
    /// a finished or ongoing game. `n` past the end is clamped.
    pub fn board_at(&self, n: usize) -> Result<Board, ReplayError> {
        let n = n.min(self.moves.len());
        Board::from_moves(&self.moves[..n])
    }

    /// Algebraic destinations for the piece on `square`.
    pub fn possible_moves(&self, square: &str) -> Result<Vec<String>, GameError> {
        let from: Square = square.parse()?;
        Ok(legal_destinations(&self.board, from)
            .into_iter()
            .map(|sq| sq.to_string())
            .collect())
    }
}

fn external_winner(reason: FinishReason) -> Option<Color> {
    match reason {
        FinishReason::Resignation(color) => Some(color.other()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
