use super::*;
use crate::types::Piece;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board_with(pieces: &[(&str, Color, PieceKind)], turn: Color) -> Board {
    let mut board = Board::empty();
    for &(s, color, kind) in pieces {
        board.put(sq(s), Piece::new(color, kind));
    }
    board.with_turn(turn)
}

fn sorted(mut squares: Vec<Square>) -> Vec<String> {
    squares.sort_by_key(|s| (s.row(), s.col()));
    squares.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_startpos_moves() {
    let board = Board::new();
    let moves = legal_moves(&board);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    assert!(moves.iter().all(|m| m.promotion.is_none()));
}

#[test]
fn test_destinations_from_startpos() {
    let board = Board::new();
    assert_eq!(sorted(legal_destinations(&board, sq("e2"))), ["e3", "e4"]);
    assert_eq!(sorted(legal_destinations(&board, sq("g1"))), ["f3", "h3"]);
    assert!(legal_destinations(&board, sq("a1")).is_empty());
    // Not the side to move, or nothing there
    assert!(legal_destinations(&board, sq("e7")).is_empty());
    assert!(legal_destinations(&board, sq("e4")).is_empty());
}

#[test]
fn test_promotion_lists_each_kind() {
    let board = board_with(
        &[
            ("a1", Color::White, PieceKind::King),
            ("h8", Color::Black, PieceKind::King),
            ("b7", Color::White, PieceKind::Pawn),
        ],
        Color::White,
    );
    let promos: Vec<PieceKind> = legal_moves(&board)
        .into_iter()
        .filter(|m| m.from == sq("b7"))
        .filter_map(|m| m.promotion)
        .collect();
    assert_eq!(promos, PieceKind::PROMOTIONS);
    assert_eq!(legal_destinations(&board, sq("b7")), vec![sq("b8")]);
}

#[test]
fn test_checkmate_detected() {
    let board = board_with(
        &[
            ("h8", Color::Black, PieceKind::King),
            ("g7", Color::White, PieceKind::Queen),
            ("f6", Color::White, PieceKind::King),
        ],
        Color::Black,
    );
    assert_eq!(
        terminal_state(&board.rules()),
        Some(Terminal::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_stalemate_detected() {
    let board = board_with(
        &[
            ("h8", Color::Black, PieceKind::King),
            ("f7", Color::White, PieceKind::Queen),
            ("g6", Color::White, PieceKind::King),
        ],
        Color::Black,
    );
    assert!(!board.in_check());
    assert_eq!(terminal_state(&board.rules()), Some(Terminal::Stalemate));
    assert!(legal_moves(&board).is_empty());
}

#[test]
fn test_not_terminal_with_escape() {
    let board = board_with(
        &[
            ("h8", Color::Black, PieceKind::King),
            ("h1", Color::White, PieceKind::Rook),
            ("a1", Color::White, PieceKind::King),
        ],
        Color::Black,
    );
    assert!(board.in_check());
    assert_eq!(terminal_state(&board.rules()), None);
    assert_eq!(
        sorted(legal_destinations(&board, sq("h8"))),
        ["g7", "g8"]
    );
}
