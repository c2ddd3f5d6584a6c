pub mod attacks;
pub mod board;
pub mod direction;
pub mod error;
pub mod game;
pub mod grid;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

mod castling;
mod legality;

// Re-export the rules surface used by front ends and tests
pub use attacks::{in_check, is_square_attacked};
pub use board::*;
pub use direction::Direction;
pub use error::*;
pub use game::*;
pub use grid::Grid;
pub use movegen::{LegalMove, Terminal, legal_destinations, legal_moves};
pub use notation::{MoveInput, parse_promotion};
pub use perft::{divide, perft};
pub use types::*;
