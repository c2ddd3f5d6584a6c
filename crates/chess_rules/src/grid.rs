//! The 8x8 square array shared by the live board and hypothetical copies.
//!
//! `Grid` is `Copy`: the check-safety simulator duplicates it per candidate
//! move instead of cloning piece objects.

use crate::direction::Direction;
use crate::types::{Color, Piece, PieceKind, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const EMPTY: Grid = Grid {
        squares: [[None; 8]; 8],
    };

    pub fn startpos() -> Self {
        let mut grid = Grid::EMPTY;
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in [Color::White, Color::Black] {
            for (col, &kind) in back.iter().enumerate() {
                grid.squares[color.back_rank() as usize][col] = Some(Piece::new(color, kind));
                grid.squares[color.pawn_rank() as usize][col] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        grid
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
    }

    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// First occupied square strictly beyond `from` along `dir`.
    pub fn nearest_occupied(&self, from: Square, dir: Direction) -> Option<Square> {
        dir.ray(from).find(|&sq| self.get(sq).is_some())
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|pc| (sq, pc)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.is(color, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.pieces().filter(|(_, pc)| pc.is(color, kind)).count() as u32
    }
}
