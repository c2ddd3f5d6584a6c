//! Compass geometry between two squares.
//!
//! [`resolve`] is the one place that decides whether a vector is a straight
//! line, a diagonal or neither. Sliding pieces, king steps and the attack
//! scanner all walk the board through [`Direction::ray`].

use crate::error::MoveError;
use crate::types::Square;

/// One of the eight rays. North is toward Black's back rank, East toward the h-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    pub const RECTILINEAR: [Direction; 4] =
        [Direction::N, Direction::S, Direction::E, Direction::W];

    pub const DIAGONAL: [Direction; 4] =
        [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    /// (row, col) step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (1, 0),
            Direction::S => (-1, 0),
            Direction::E => (0, 1),
            Direction::W => (0, -1),
            Direction::NE => (1, 1),
            Direction::NW => (1, -1),
            Direction::SE => (-1, 1),
            Direction::SW => (-1, -1),
        }
    }

    pub fn is_rectilinear(self) -> bool {
        matches!(
            self,
            Direction::N | Direction::S | Direction::E | Direction::W
        )
    }

    pub fn is_diagonal(self) -> bool {
        !self.is_rectilinear()
    }

    /// Squares outward from `from` (exclusive) until the board edge.
    pub fn ray(self, from: Square) -> Ray {
        Ray {
            next: self.step(from),
            dir: self,
        }
    }

    pub fn step(self, from: Square) -> Option<Square> {
        let (dr, dc) = self.delta();
        from.offset(dr, dc)
    }
}

#[derive(Clone, Debug)]
pub struct Ray {
    next: Option<Square>,
    dir: Direction,
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next?;
        self.next = self.dir.step(current);
        Some(current)
    }
}

/// Classify the vector `from -> to`.
///
/// Returns `Ok(None)` for anything that is neither rectilinear nor exactly
/// diagonal (knight jumps, for instance) and `SameSquare` when there is no
/// vector at all.
pub fn resolve(from: Square, to: Square) -> Result<Option<Direction>, MoveError> {
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;

    let dir = match (dr.signum(), dc.signum()) {
        (0, 0) => return Err(MoveError::SameSquare),
        (1, 0) => Direction::N,
        (-1, 0) => Direction::S,
        (0, 1) => Direction::E,
        (0, -1) => Direction::W,
        _ if dr.abs() != dc.abs() => return Ok(None),
        (1, 1) => Direction::NE,
        (1, -1) => Direction::NW,
        (-1, 1) => Direction::SE,
        _ => Direction::SW,
    };
    Ok(Some(dir))
}

/// King-step distance: the number of single steps along a ray from `a` to `b`.
pub fn distance(a: Square, b: Square) -> u8 {
    a.row().abs_diff(b.row()).max(a.col().abs_diff(b.col()))
}

#[cfg(test)]
#[path = "direction_tests.rs"]
mod direction_tests;
