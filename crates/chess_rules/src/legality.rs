//! Per-piece legality testers and the check-safety gate.
//!
//! Every tester resolves the move's direction, rejects shapes the piece
//! cannot make, checks blocking and capture rules, and ends in
//! [`Rules::gate`]. Nothing here mutates the board; the result is a [`Plan`]
//! the board mutator later commits.

use crate::attacks::{self, KNIGHT_OFFSETS};
use crate::castling;
use crate::direction::{self, Direction};
use crate::error::MoveError;
use crate::grid::Grid;
use crate::types::{Color, Move, MoveEffect, Piece, PieceKind, Square};

/// A proposed move before validation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candidate {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub promotion: Option<PieceKind>,
}

/// Outcome of a successful test: what the commit has to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Plan {
    pub effect: MoveEffect,
    /// Set only when the move really promotes.
    pub promotion: Option<PieceKind>,
}

impl Plan {
    fn plain(effect: MoveEffect) -> Self {
        Self {
            effect,
            promotion: None,
        }
    }
}

/// Read-only view of the state the testers need.
#[derive(Clone, Copy)]
pub(crate) struct Rules<'a> {
    pub grid: &'a Grid,
    pub mover: Color,
    pub last_move: Option<&'a Move>,
}

impl<'a> Rules<'a> {
    /// Dispatch on the moving piece's kind.
    pub fn check(&self, c: &Candidate) -> Result<Plan, MoveError> {
        match c.piece.kind {
            PieceKind::King => self.king(c),
            PieceKind::Queen => self.queen(c),
            PieceKind::Rook => self.rook(c),
            PieceKind::Bishop => self.bishop(c),
            PieceKind::Knight => self.knight(c),
            PieceKind::Pawn => self.pawn(c),
        }
    }

    /// Would the mover's king be safe after `from -> to` with `effect`?
    ///
    /// Works on a copy of the grid; the real one is never touched.
    pub fn leaves_king_safe(
        &self,
        from: Square,
        to: Square,
        effect: MoveEffect,
        promotion: Option<PieceKind>,
    ) -> bool {
        let mut hypo = *self.grid;
        let Some(mover) = hypo.take(from) else {
            return false;
        };
        let placed = match promotion {
            Some(kind) => Piece::new(mover.color, kind),
            None => mover,
        };
        hypo.set(to, Some(placed));
        if let MoveEffect::EnPassant { captured_at } = effect {
            hypo.set(captured_at, None);
        }
        !attacks::in_check(&hypo, self.mover)
    }

    /// The single legality gate every tester finishes with.
    fn gate(&self, c: &Candidate, plan: Plan) -> Result<Plan, MoveError> {
        if self.leaves_king_safe(c.from, c.to, plan.effect, plan.promotion) {
            Ok(plan)
        } else {
            Err(MoveError::KingWouldBeInCheck)
        }
    }

    /// Effect of landing on `to`: nothing, a capture, or an illegal self-capture.
    fn landing(&self, to: Square) -> Result<MoveEffect, MoveError> {
        match self.grid.get(to) {
            None => Ok(MoveEffect::Quiet),
            Some(pc) if pc.color == self.mover => Err(MoveError::CannotCaptureOwnPiece),
            Some(pc) => Ok(MoveEffect::Capture { captured: pc.kind }),
        }
    }

    fn king(&self, c: &Candidate) -> Result<Plan, MoveError> {
        let dir = direction::resolve(c.from, c.to)?
            .ok_or(MoveError::WrongShapeForPiece(PieceKind::King))?;
        let d_row = c.to.row() as i8 - c.from.row() as i8;
        let d_col = c.to.col() as i8 - c.from.col() as i8;

        if d_row == 0 && d_col.abs() == 2 {
            return castling::check(self, c, dir);
        }
        if direction::distance(c.from, c.to) != 1 {
            return Err(MoveError::WrongShapeForPiece(PieceKind::King));
        }
        let effect = self.landing(c.to)?;
        self.gate(c, Plan::plain(effect))
    }

    fn queen(&self, c: &Candidate) -> Result<Plan, MoveError> {
        let dir = direction::resolve(c.from, c.to)?
            .ok_or(MoveError::WrongShapeForPiece(PieceKind::Queen))?;
        self.slide(c, dir)
    }

    fn rook(&self, c: &Candidate) -> Result<Plan, MoveError> {
        match direction::resolve(c.from, c.to)? {
            Some(dir) if dir.is_rectilinear() => self.slide(c, dir),
            _ => Err(MoveError::WrongShapeForPiece(PieceKind::Rook)),
        }
    }

    fn bishop(&self, c: &Candidate) -> Result<Plan, MoveError> {
        match direction::resolve(c.from, c.to)? {
            Some(dir) if dir.is_diagonal() => self.slide(c, dir),
            _ => Err(MoveError::WrongShapeForPiece(PieceKind::Bishop)),
        }
    }

    /// Shared path for rook, bishop and queen.
    ///
    /// The target must lie strictly before the nearest occupied square on the
    /// ray, or be that square and hold an enemy piece.
    fn slide(&self, c: &Candidate, dir: Direction) -> Result<Plan, MoveError> {
        let reach = direction::distance(c.from, c.to);
        let effect = match self.grid.nearest_occupied(c.from, dir) {
            Some(blocker) if reach > direction::distance(c.from, blocker) => {
                return Err(MoveError::PathBlocked);
            }
            Some(blocker) if blocker == c.to => self.landing(c.to)?,
            _ => MoveEffect::Quiet,
        };
        self.gate(c, Plan::plain(effect))
    }

    fn knight(&self, c: &Candidate) -> Result<Plan, MoveError> {
        // A knight jump is never a straight line or a diagonal.
        if direction::resolve(c.from, c.to)?.is_some() {
            return Err(MoveError::WrongShapeForPiece(PieceKind::Knight));
        }
        let d_row = c.to.row() as i8 - c.from.row() as i8;
        let d_col = c.to.col() as i8 - c.from.col() as i8;
        if !KNIGHT_OFFSETS.contains(&(d_row, d_col)) {
            return Err(MoveError::WrongShapeForPiece(PieceKind::Knight));
        }
        let effect = self.landing(c.to)?;
        self.gate(c, Plan::plain(effect))
    }

    fn pawn(&self, c: &Candidate) -> Result<Plan, MoveError> {
        let dir = direction::resolve(c.from, c.to)?;
        let fwd = self.mover.forward();
        let d_row = c.to.row() as i8 - c.from.row() as i8;
        let d_col = c.to.col() as i8 - c.from.col() as i8;
        let wrong_shape = MoveError::WrongShapeForPiece(PieceKind::Pawn);

        // Forward file or one of the two forward diagonals only.
        if dir.is_none() || d_row.signum() != fwd {
            return Err(wrong_shape);
        }

        let effect = if d_col == 0 {
            if d_row == fwd {
                if !self.grid.is_empty(c.to) {
                    return Err(MoveError::PathBlocked);
                }
            } else if d_row == 2 * fwd {
                if c.from.row() != self.mover.pawn_rank() {
                    return Err(wrong_shape);
                }
                let passed = c.from.offset(fwd, 0).ok_or(MoveError::OutOfBounds)?;
                if !self.grid.is_empty(passed) || !self.grid.is_empty(c.to) {
                    return Err(MoveError::PathBlocked);
                }
            } else {
                return Err(wrong_shape);
            }
            MoveEffect::Quiet
        } else {
            if d_row != fwd {
                return Err(wrong_shape);
            }
            match self.grid.get(c.to) {
                Some(pc) if pc.color == self.mover => return Err(MoveError::CannotCaptureOwnPiece),
                Some(pc) => MoveEffect::Capture { captured: pc.kind },
                None => match self.en_passant_victim(c) {
                    Some(captured_at) => MoveEffect::EnPassant { captured_at },
                    None => return Err(MoveError::CannotCaptureEmptySquare),
                },
            }
        };

        let promotion = if c.to.row() == self.mover.promotion_rank() {
            match c.promotion {
                None => return Err(MoveError::PromotionRequired),
                Some(kind) if !kind.is_promotion_target() => {
                    return Err(MoveError::InvalidPromotion(kind));
                }
                Some(kind) => Some(kind),
            }
        } else {
            None
        };

        self.gate(c, Plan { effect, promotion })
    }

    /// The enemy pawn an en-passant capture would remove, if the previous
    /// move was that pawn's two-square push onto the square beside us.
    fn en_passant_victim(&self, c: &Candidate) -> Option<Square> {
        let last = self.last_move?;
        let victim = Square::new(c.from.row() as i8, c.to.col() as i8)?;
        let pc = self.grid.get(victim)?;
        let qualifies = pc.is(self.mover.other(), PieceKind::Pawn)
            && last.is_double_pawn_push()
            && last.piece.color != self.mover
            && last.to == victim;
        qualifies.then_some(victim)
    }
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
