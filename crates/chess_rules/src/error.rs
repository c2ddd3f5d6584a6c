//! Error types surfaced to callers of the rules engine.
//!
//! Every variant carries a message meant to be shown to a player as-is.
//! Validation is read-only, so receiving any of these means the board is
//! exactly as it was before the call.

use thiserror::Error;

use crate::types::{Color, PieceKind};

/// Why a proposed move was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("{}", game_over_message(.winner))]
    GameAlreadyOver { winner: Option<Color> },

    #[error("You don't have access to that square")]
    NotYourPiece,

    #[error("Move out of bounds")]
    OutOfBounds,

    #[error("Can't stay in the same spot")]
    SameSquare,

    #[error("{0} doesn't move that way")]
    WrongShapeForPiece(PieceKind),

    #[error("You have a piece in your way")]
    PathBlocked,

    #[error("Can't capture your own pieces")]
    CannotCaptureOwnPiece,

    #[error("Can't capture an empty square")]
    CannotCaptureEmptySquare,

    #[error("Pawn promotion requires a piece type")]
    PromotionRequired,

    #[error("Can't promote a PAWN to {0}")]
    InvalidPromotion(PieceKind),

    #[error("KING will be in 'CHECK'")]
    KingWouldBeInCheck,

    #[error("There is a piece in the way")]
    CastlingBlocked,

    #[error("Can't Castle if KING already moved")]
    CastlingKingMoved,

    #[error("Can't Castle if ROOK already moved")]
    CastlingRookMoved,

    #[error("Can't Castle if KING in CHECK")]
    CastlingWhileInCheck,

    #[error("Can't Castle without a ROOK")]
    CastlingWithoutRook,

    #[error("Can't Castle, KING will pass a CHECK square or will be in CHECK")]
    CastlingThroughCheck,
}

fn game_over_message(winner: &Option<Color>) -> String {
    match winner {
        Some(color) => format!("Game is already over, {color} won"),
        None => "Game is already over, nobody won".to_string(),
    }
}

/// Malformed move text, rejected before it reaches the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected two squares and an optional promotion, got {0} tokens")]
    TokenCount(usize),

    #[error("'{0}' is not a square between a1 and h8")]
    BadSquare(String),

    #[error("'{0}' is not one of QUEEN, ROOK, BISHOP, KNIGHT")]
    BadPromotion(String),
}

/// Failures of the session wrapper around a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("It is not your turn")]
    NotYourTurn,

    #[error("Player {0} is not part of this game")]
    NotAParticipant(i64),

    #[error("There is no draw offer to answer")]
    NoDrawOffer,

    #[error("You can't accept your own draw offer")]
    OwnDrawOffer,
}

/// A stored history that no longer replays.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("error replaying move {index}: {source}")]
    Move {
        index: usize,
        #[source]
        source: MoveError,
    },
}
