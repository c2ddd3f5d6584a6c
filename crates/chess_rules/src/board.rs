use std::fmt;

use tracing::{debug, info, trace};

use crate::attacks;
use crate::error::{MoveError, ReplayError};
use crate::grid::Grid;
use crate::legality::{Candidate, Plan, Rules};
use crate::movegen::{self, Terminal};
use crate::types::*;

/// Pieces created per color and kind. Kings are not tallied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PieceTally {
    counts: [[u32; 5]; 2],
}

impl PieceTally {
    /// The kinds a tally tracks, in display order.
    pub const KINDS: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
    ];

    /// 8 pawns, 2 rooks, 2 knights, 2 bishops and 1 queen per side.
    pub fn starting() -> Self {
        let side = [8, 2, 2, 2, 1];
        Self {
            counts: [side, side],
        }
    }

    fn slot(kind: PieceKind) -> Option<usize> {
        Self::KINDS.iter().position(|&k| k == kind)
    }

    pub fn get(&self, color: Color, kind: PieceKind) -> u32 {
        Self::slot(kind).map_or(0, |i| self.counts[color.idx()][i])
    }

    fn bump(&mut self, color: Color, kind: PieceKind) {
        if let Some(i) = Self::slot(kind) {
            self.counts[color.idx()][i] += 1;
        }
    }
}

/// Live game state: the grid plus everything the rules need between moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    turn: Color,
    last_move: Option<Move>,
    created: PieceTally,
    finished: bool,
    winner: Option<Color>,
    description: String,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            grid: Grid::startpos(),
            turn: Color::White,
            last_move: None,
            created: PieceTally::starting(),
            finished: false,
            winner: None,
            description: String::new(),
        }
    }

    /// A board with no pieces and empty creation counters. Populate it with
    /// [`Board::put`].
    pub fn empty() -> Self {
        Self {
            grid: Grid::EMPTY,
            created: PieceTally::default(),
            ..Self::new()
        }
    }

    /// Place `piece` on `square`, counting it as created.
    pub fn put(&mut self, square: Square, piece: Piece) -> &mut Self {
        self.grid.set(square, Some(piece));
        self.created.bump(piece.color, piece.kind);
        self
    }

    pub fn with_turn(mut self, color: Color) -> Self {
        self.turn = color;
        self
    }

    /// Rebuild a board by replaying `moves` from the starting position.
    pub fn from_moves(moves: &[Move]) -> Result<Self, ReplayError> {
        debug!(moves = moves.len(), "replaying history");
        let mut board = Board::new();
        for (index, mv) in moves.iter().enumerate() {
            board
                .apply_move(mv)
                .map_err(|source| ReplayError::Move { index, source })?;
        }
        debug!(turn = %board.turn, finished = board.finished, "replay done");
        Ok(board)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid.get(square)
    }

    /// Display symbol for `square`, a space when empty.
    pub fn glyph_at(&self, square: Square) -> char {
        self.grid.get(square).map_or(' ', |pc| pc.glyph())
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// How the game ended; empty while it is ongoing.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created(&self) -> &PieceTally {
        &self.created
    }

    /// Is the side to move in check?
    pub fn in_check(&self) -> bool {
        attacks::in_check(&self.grid, self.turn)
    }

    /// Captured pieces derived as created minus currently on board.
    ///
    /// A pawn that promoted and was later captured shows up as a captured
    /// piece of its promoted kind.
    pub fn captured_pieces(&self) -> PieceTally {
        let mut out = PieceTally::default();
        for color in [Color::White, Color::Black] {
            for (i, &kind) in PieceTally::KINDS.iter().enumerate() {
                let created = self.created.get(color, kind);
                out.counts[color.idx()][i] = created.saturating_sub(self.grid.count(color, kind));
            }
        }
        out
    }

    pub(crate) fn rules(&self) -> Rules<'_> {
        Rules {
            grid: &self.grid,
            mover: self.turn,
            last_move: self.last_move.as_ref(),
        }
    }

    /// Validate and commit a move for the side to move.
    ///
    /// On error the board is untouched. On success returns the committed
    /// move with its effect resolved and default metadata.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        self.play(from, to, promotion, MoveMeta::default())
    }

    /// Validate and commit a stored move, keeping its metadata.
    pub fn apply_move(&mut self, mv: &Move) -> Result<Move, MoveError> {
        self.play(mv.from, mv.to, mv.promotion, mv.meta)
    }

    /// Like [`Board::make_move`], stamping `meta` on the committed move.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        meta: MoveMeta,
    ) -> Result<Move, MoveError> {
        let (piece, plan) = self.validate(from, to, promotion).inspect_err(|err| {
            trace!(%from, %to, reason = %err, "move rejected");
        })?;

        let mv = Move {
            from,
            to,
            piece,
            promotion: plan.promotion,
            effect: plan.effect,
            meta,
        };
        self.commit(&mv);
        Ok(mv)
    }

    fn validate(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(Piece, Plan), MoveError> {
        if self.finished {
            return Err(MoveError::GameAlreadyOver {
                winner: self.winner,
            });
        }
        let piece = match self.grid.get(from) {
            Some(pc) if pc.color == self.turn => pc,
            _ => return Err(MoveError::NotYourPiece),
        };
        let plan = self.rules().check(&Candidate {
            from,
            to,
            piece,
            promotion,
        })?;
        Ok((piece, plan))
    }

    /// The only mutation path for moves. `mv` must have passed validation.
    fn commit(&mut self, mv: &Move) {
        let Some(mut moving) = self.grid.take(mv.from) else {
            return;
        };

        match mv.effect {
            MoveEffect::EnPassant { captured_at } => self.grid.set(captured_at, None),
            MoveEffect::Castle { rook_from, rook_to } => {
                if let Some(mut rook) = self.grid.take(rook_from) {
                    rook.move_count = rook.move_count.saturating_add(1);
                    self.grid.set(rook_to, Some(rook));
                }
            }
            MoveEffect::Quiet | MoveEffect::Capture { .. } => {}
        }

        if let Some(kind) = mv.promotion {
            moving = Piece::new(moving.color, kind);
            self.created.bump(moving.color, kind);
        }
        moving.move_count = moving.move_count.saturating_add(1);
        self.grid.set(mv.to, Some(moving));

        debug!(
            from = %mv.from,
            to = %mv.to,
            piece = %mv.piece.kind,
            effect = ?mv.effect,
            "move committed"
        );

        self.last_move = Some(*mv);
        self.turn = self.turn.other();

        let terminal = movegen::terminal_state(&self.rules());
        if let Some(terminal) = terminal {
            let (winner, description) = match terminal {
                Terminal::Checkmate { winner } => (Some(winner), "Checkmate"),
                Terminal::Stalemate => (None, "Stalemate"),
            };
            self.close(winner, description);
        }
    }

    /// End the game outside the move pathway (resignation, agreed draw).
    pub fn finish(
        &mut self,
        winner: Option<Color>,
        description: impl Into<String>,
    ) -> Result<(), MoveError> {
        if self.finished {
            return Err(MoveError::GameAlreadyOver {
                winner: self.winner,
            });
        }
        self.close(winner, description);
        Ok(())
    }

    fn close(&mut self, winner: Option<Color>, description: impl Into<String>) {
        self.finished = true;
        self.winner = winner;
        self.description = description.into();
        info!(reason = %self.description, winner = ?self.winner, "game finished");
    }
}

/// Rank 8 at the top, files labelled underneath.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8i8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8i8 {
                let glyph = Square::new(row, col)
                    .and_then(|sq| self.grid.get(sq))
                    .map_or('.', |pc| pc.glyph());
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 'a'..='h' {
            write!(f, " {file}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
