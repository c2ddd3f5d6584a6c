use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row delta of one pawn step.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row the pawns start on; double pushes are only allowed from here.
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn promotion_rank(self) -> u8 {
        self.other().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Kinds a pawn may become, in the order offered to players.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "KING",
            PieceKind::Queen => "QUEEN",
            PieceKind::Rook => "ROOK",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Pawn => "PAWN",
        }
    }

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece instance. `move_count` counts the moves made by this exact piece
/// since it came into existence and only gates castling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    #[serde(default)]
    pub move_count: u16,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            move_count: 0,
        }
    }

    pub fn is(&self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Unicode chess symbol for display.
    pub fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '\u{2654}',
            (Color::White, PieceKind::Queen) => '\u{2655}',
            (Color::White, PieceKind::Rook) => '\u{2656}',
            (Color::White, PieceKind::Bishop) => '\u{2657}',
            (Color::White, PieceKind::Knight) => '\u{2658}',
            (Color::White, PieceKind::Pawn) => '\u{2659}',
            (Color::Black, PieceKind::King) => '\u{265A}',
            (Color::Black, PieceKind::Queen) => '\u{265B}',
            (Color::Black, PieceKind::Rook) => '\u{265C}',
            (Color::Black, PieceKind::Bishop) => '\u{265D}',
            (Color::Black, PieceKind::Knight) => '\u{265E}',
            (Color::Black, PieceKind::Pawn) => '\u{265F}',
        }
    }
}

/// A square on the 8x8 board. Row 0 is White's back rank, row 7 Black's;
/// col 0 is the a-file. Always in bounds once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquare", into = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Like [`Square::new`] for untrusted coordinates.
    pub fn checked(row: i32, col: i32) -> Result<Square, MoveError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(MoveError::OutOfBounds)
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// All 64 squares, a1 first, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.row) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawSquare {
    row: i32,
    col: i32,
}

impl TryFrom<RawSquare> for Square {
    type Error = MoveError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::checked(raw.row, raw.col)
    }
}

impl From<Square> for RawSquare {
    fn from(sq: Square) -> Self {
        RawSquare {
            row: sq.row as i32,
            col: sq.col as i32,
        }
    }
}

/// Bookkeeping carried with a move for persistence; the rules never read it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMeta {
    pub player_id: i64,
    /// Milliseconds the mover spent on this move. Recorded, not enforced.
    pub time_ms: u64,
    /// Zero-based position in the game's history.
    pub order: u32,
}

/// What a committed move did besides relocating the mover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveEffect {
    #[default]
    Quiet,
    Capture {
        captured: PieceKind,
    },
    /// Pawn capture landing on an empty square; the victim stood on `captured_at`.
    EnPassant {
        captured_at: Square,
    },
    Castle {
        rook_from: Square,
        rook_to: Square,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The mover as it stood before the move.
    pub piece: Piece,
    #[serde(default)]
    pub promotion: Option<PieceKind>,
    #[serde(default)]
    pub effect: MoveEffect,
    #[serde(default)]
    pub meta: MoveMeta,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        matches!(
            self.effect,
            MoveEffect::Capture { .. } | MoveEffect::EnPassant { .. }
        )
    }

    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }
}

/// Writes the move in the same text format players type it in.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, " {kind}")?;
        }
        Ok(())
    }
}
