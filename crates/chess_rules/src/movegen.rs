//! Candidate enumeration and terminal-state detection.
//!
//! The candidate generator over-generates: full rays for
//! sliders, every fixed offset for knights and kings, every pawn push and
//! diagonal. The per-piece testers in [`crate::legality`] are the only
//! judge of what is legal.

use crate::attacks::{self, KNIGHT_OFFSETS};
use crate::board::Board;
use crate::direction::Direction;
use crate::legality::{Candidate, Rules};
use crate::types::{Color, PieceKind, Square};

/// A validated move, ready to be passed back to [`Board::make_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// How a game ended by the rules alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminal {
    Checkmate { winner: Color },
    Stalemate,
}

fn push_ray(from: Square, dirs: &[Direction], out: &mut Vec<Square>) {
    for &dir in dirs {
        out.extend(dir.ray(from));
    }
}

fn push_offsets(from: Square, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    out.extend(offsets.iter().filter_map(|&(dr, dc)| from.offset(dr, dc)));
}

/// Geometrically possible destinations for the piece on `from`, blocking and
/// check ignored.
fn destinations(kind: PieceKind, color: Color, from: Square, out: &mut Vec<Square>) {
    match kind {
        PieceKind::Rook => push_ray(from, &Direction::RECTILINEAR, out),
        PieceKind::Bishop => push_ray(from, &Direction::DIAGONAL, out),
        PieceKind::Queen => push_ray(from, &Direction::ALL, out),
        PieceKind::Knight => push_offsets(from, &KNIGHT_OFFSETS, out),
        PieceKind::King => {
            out.extend(Direction::ALL.iter().filter_map(|d| d.step(from)));
            push_offsets(from, &[(0, 2), (0, -2)], out);
        }
        PieceKind::Pawn => {
            let f = color.forward();
            push_offsets(from, &[(f, 0), (2 * f, 0), (f, -1), (f, 1)], out);
        }
    }
}

/// Every candidate for the side to move. Pawn moves onto the last rank carry
/// a Queen placeholder so the tester does not reject them for lacking one.
fn candidates(rules: &Rules<'_>) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(128);
    let mut dests = Vec::with_capacity(32);
    for (from, piece) in rules.grid.pieces().filter(|(_, pc)| pc.color == rules.mover) {
        dests.clear();
        destinations(piece.kind, piece.color, from, &mut dests);
        for &to in &dests {
            let promotion = (piece.kind == PieceKind::Pawn
                && to.row() == rules.mover.promotion_rank())
            .then_some(PieceKind::Queen);
            out.push(Candidate {
                from,
                to,
                piece,
                promotion,
            });
        }
    }
    out
}

/// All legal moves for the side to move, each promotion choice listed
/// separately. Empty once the game is finished.
pub fn legal_moves(board: &Board) -> Vec<LegalMove> {
    if board.is_finished() {
        return Vec::new();
    }
    let rules = board.rules();
    let mut out = Vec::with_capacity(64);
    for c in candidates(&rules) {
        let Ok(plan) = rules.check(&c) else {
            continue;
        };
        match plan.promotion {
            Some(_) => out.extend(PieceKind::PROMOTIONS.iter().map(|&kind| LegalMove {
                from: c.from,
                to: c.to,
                promotion: Some(kind),
            })),
            None => out.push(LegalMove {
                from: c.from,
                to: c.to,
                promotion: None,
            }),
        }
    }
    out
}

/// Legal destination squares for the piece on `from`.
///
/// Empty if the square is empty, holds a piece of the side not to move, or
/// the game is over.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    if board.is_finished() {
        return Vec::new();
    }
    let rules = board.rules();
    let Some(piece) = rules.grid.get(from) else {
        return Vec::new();
    };
    if piece.color != rules.mover {
        return Vec::new();
    }

    let mut dests = Vec::with_capacity(32);
    destinations(piece.kind, piece.color, from, &mut dests);
    dests
        .into_iter()
        .filter(|&to| {
            let promotion = (piece.kind == PieceKind::Pawn
                && to.row() == rules.mover.promotion_rank())
            .then_some(PieceKind::Queen);
            rules
                .check(&Candidate {
                    from,
                    to,
                    piece,
                    promotion,
                })
                .is_ok()
        })
        .collect()
}

/// True if at least one candidate passes its tester.
pub(crate) fn has_legal_move(rules: &Rules<'_>) -> bool {
    candidates(rules).iter().any(|c| rules.check(c).is_ok())
}

/// Checkmate or stalemate for the side to move, if either applies.
pub(crate) fn terminal_state(rules: &Rules<'_>) -> Option<Terminal> {
    if has_legal_move(rules) {
        return None;
    }
    if attacks::in_check(rules.grid, rules.mover) {
        Some(Terminal::Checkmate {
            winner: rules.mover.other(),
        })
    } else {
        Some(Terminal::Stalemate)
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
