//! Attack detection over a [`Grid`].
//!
//! Works on any grid, real or hypothetical, so the same scan answers both
//! "am I in check now" and "would I be in check after this move".

use crate::direction::Direction;
use crate::grid::Grid;
use crate::types::{Color, Piece, PieceKind, Square};

/// (row, col) offsets of a knight jump.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// First piece met along `dir` from `from`, if any.
fn first_piece(grid: &Grid, from: Square, dir: Direction) -> Option<Piece> {
    grid.nearest_occupied(from, dir).and_then(|sq| grid.get(sq))
}

/// True if any piece of color `by` attacks `target` on `grid`.
pub fn is_square_attacked(grid: &Grid, target: Square, by: Color) -> bool {
    // Rook/queen along ranks and files
    for dir in Direction::RECTILINEAR {
        if let Some(pc) = first_piece(grid, target, dir)
            && pc.color == by
            && matches!(pc.kind, PieceKind::Rook | PieceKind::Queen)
        {
            return true;
        }
    }

    // Bishop/queen along diagonals
    for dir in Direction::DIAGONAL {
        if let Some(pc) = first_piece(grid, target, dir)
            && pc.color == by
            && matches!(pc.kind, PieceKind::Bishop | PieceKind::Queen)
        {
            return true;
        }
    }

    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(s) = target.offset(dr, dc)
            && let Some(pc) = grid.get(s)
            && pc.is(by, PieceKind::Knight)
        {
            return true;
        }
    }

    // A pawn of `by` attacks from one step behind the target, seen from its own side.
    let behind = -by.forward();
    for dc in [-1, 1] {
        if let Some(s) = target.offset(behind, dc)
            && let Some(pc) = grid.get(s)
            && pc.is(by, PieceKind::Pawn)
        {
            return true;
        }
    }

    // Enemy king adjacency
    for dir in Direction::ALL {
        if let Some(s) = dir.step(target)
            && let Some(pc) = grid.get(s)
            && pc.is(by, PieceKind::King)
        {
            return true;
        }
    }

    false
}

/// True if `color`'s king stands attacked. A grid without that king is never in check.
pub fn in_check(grid: &Grid, color: Color) -> bool {
    match grid.king_square(color) {
        Some(ksq) => is_square_attacked(grid, ksq, color.other()),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
