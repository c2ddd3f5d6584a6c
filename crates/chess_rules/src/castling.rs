//! Castling validation.
//!
//! The king is asked to move two files sideways from its home square. The
//! checks run in a fixed order so a player always sees the first reason
//! that applies.

use crate::attacks;
use crate::direction::Direction;
use crate::error::MoveError;
use crate::legality::{Candidate, Plan, Rules};
use crate::types::{MoveEffect, PieceKind, Square};

const KING_HOME_COL: u8 = 4;

pub(crate) fn check(rules: &Rules<'_>, c: &Candidate, dir: Direction) -> Result<Plan, MoveError> {
    let color = rules.mover;
    let rank = color.back_rank();

    if c.piece.move_count > 0 || c.from.row() != rank || c.from.col() != KING_HOME_COL {
        return Err(MoveError::CastlingKingMoved);
    }
    if attacks::in_check(rules.grid, color) {
        return Err(MoveError::CastlingWhileInCheck);
    }

    let rook_col = if dir == Direction::E { 7 } else { 0 };
    let rook_from = Square::new(rank as i8, rook_col).ok_or(MoveError::OutOfBounds)?;
    let rook = match rules.grid.get(rook_from) {
        Some(pc) if pc.is(color, PieceKind::Rook) => pc,
        _ => return Err(MoveError::CastlingWithoutRook),
    };
    if rook.move_count > 0 {
        return Err(MoveError::CastlingRookMoved);
    }

    if rules.grid.nearest_occupied(c.from, dir) != Some(rook_from) {
        return Err(MoveError::CastlingBlocked);
    }

    // The square the king crosses, then the one it lands on.
    let crossed = dir.step(c.from).ok_or(MoveError::OutOfBounds)?;
    for sq in [crossed, c.to] {
        if !rules.leaves_king_safe(c.from, sq, MoveEffect::Quiet, None) {
            return Err(MoveError::CastlingThroughCheck);
        }
    }

    Ok(Plan {
        effect: MoveEffect::Castle {
            rook_from,
            rook_to: crossed,
        },
        promotion: None,
    })
}

#[cfg(test)]
#[path = "castling_tests.rs"]
mod castling_tests;
