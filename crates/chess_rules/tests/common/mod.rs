#![allow(dead_code)]

use chess_rules::{Board, Color, Move, MoveError, MoveInput, Piece, PieceKind, Square};

pub fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Build a board from the piece-placement field of a FEN string
/// (rank 8 first, digits for empty runs). All pieces start with move count 0.
pub fn board_from_placement(placement: &str, turn: Color) -> Board {
    let mut board = Board::empty();
    for (i, rank) in placement.split('/').enumerate() {
        let row = 7 - i as i8;
        let mut col = 0i8;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as i8;
                continue;
            }
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match ch.to_ascii_lowercase() {
                'k' => PieceKind::King,
                'q' => PieceKind::Queen,
                'r' => PieceKind::Rook,
                'b' => PieceKind::Bishop,
                'n' => PieceKind::Knight,
                'p' => PieceKind::Pawn,
                other => panic!("bad piece char {other:?}"),
            };
            let square = Square::new(row, col).expect("placement out of bounds");
            board.put(square, Piece::new(color, kind));
            col += 1;
        }
        assert_eq!(col, 8, "rank {rank:?} does not cover 8 files");
    }
    board.with_turn(turn)
}

pub fn play(board: &mut Board, text: &str) -> Result<Move, MoveError> {
    let input: MoveInput = text.parse().unwrap();
    board.make_move(input.from, input.to, input.promotion)
}

pub fn play_all(board: &mut Board, moves: &[&str]) -> Vec<Move> {
    moves
        .iter()
        .map(|m| play(board, m).unwrap_or_else(|e| panic!("{m}: {e}")))
        .collect()
}
