//! Text formats typed by players: algebraic squares and move input.
//!
//! A move is two squares separated by whitespace, optionally followed by
//! one of `QUEEN`, `ROOK`, `BISHOP`, `KNIGHT`, e.g. `e7 e8 QUEEN`.

use std::str::FromStr;

use crate::error::InputError;
use crate::types::{PieceKind, Square};

impl FromStr for Square {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InputError::BadSquare(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(bad());
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(bad());
        }
        Square::new((rank - b'1') as i8, (file - b'a') as i8).ok_or_else(bad)
    }
}

/// Promotion token as written in move text. Only the four target kinds are accepted.
pub fn parse_promotion(token: &str) -> Result<PieceKind, InputError> {
    PieceKind::PROMOTIONS
        .into_iter()
        .find(|kind| kind.name() == token)
        .ok_or_else(|| InputError::BadPromotion(token.to_string()))
}

/// A parsed but not yet validated move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveInput {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let (from, to, promo) = match tokens.as_slice() {
            [from, to] => (from, to, None),
            [from, to, promo] => (from, to, Some(promo)),
            _ => return Err(InputError::TokenCount(tokens.len())),
        };
        Ok(MoveInput {
            from: from.parse()?,
            to: to.parse()?,
            promotion: promo.map(|p| parse_promotion(p)).transpose()?,
        })
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
