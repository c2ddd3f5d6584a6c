//! Checkmate and stalemate detection.

mod common;

use chess_rules::{Color, legal_destinations, legal_moves};
use common::{board_from_placement, play, sq};

// =============================================================================
// Checkmate
// =============================================================================

#[test]
fn test_back_rank_mate() {
    let mut board = board_from_placement("6k1/5ppp/8/8/8/8/8/R5K1", Color::White);
    play(&mut board, "a1 a8").unwrap();
    assert!(board.is_finished());
    assert_eq!(board.winner(), Some(Color::White));
    assert_eq!(board.description(), "Checkmate");
    assert!(legal_moves(&board).is_empty());
}

#[test]
fn test_back_rank_check_with_defender_is_not_mate() {
    let mut board = board_from_placement("6k1/5ppp/1n6/8/8/8/8/R5K1", Color::White);
    play(&mut board, "a1 a8").unwrap();
    assert!(!board.is_finished());
    assert!(board.in_check());
    // Capture the rook or interpose on c8
    assert_eq!(legal_destinations(&board, sq("b6")), vec![sq("c8"), sq("a8")]);
}

#[test]
fn test_smothered_mate_position() {
    let board = board_from_placement("6rk/5Npp/8/8/8/8/8/6K1", Color::Black);
    assert!(board.in_check());
    assert!(legal_moves(&board).is_empty());
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn test_stalemate_by_queen_move() {
    let mut board = board_from_placement("k7/2K5/8/1Q6/8/8/8/8", Color::White);
    play(&mut board, "b5 b6").unwrap();
    assert!(board.is_finished());
    assert_eq!(board.winner(), None);
    assert_eq!(board.description(), "Stalemate");
}

#[test]
fn test_stalemate_king_and_pawn() {
    let board = board_from_placement("6k1/6P1/6K1/8/8/8/8/8", Color::Black);
    assert!(!board.in_check());
    assert!(legal_moves(&board).is_empty());
}

#[test]
fn test_lone_king_has_moves() {
    let board = board_from_placement("8/8/8/8/8/8/8/K6k", Color::White);
    assert_eq!(legal_moves(&board).len(), 3);
}

// =============================================================================
// Escapes the generator must find
// =============================================================================

#[test]
fn test_en_passant_answers_pawn_check() {
    let mut board = board_from_placement("8/8/8/4k3/4p3/8/3P4/4K3", Color::White);
    play(&mut board, "d2 d4").unwrap();
    assert!(board.in_check());
    assert!(legal_destinations(&board, sq("e4")).contains(&sq("d3")));

    play(&mut board, "e4 d3").unwrap();
    assert_eq!(board.piece_at(sq("d4")), None);
    assert!(!board.is_finished());
}

#[test]
fn test_finished_board_lists_nothing() {
    let mut board = board_from_placement("6k1/5ppp/8/8/8/8/8/R5K1", Color::White);
    play(&mut board, "a1 a8").unwrap();
    assert!(legal_destinations(&board, sq("g8")).is_empty());
    assert!(legal_destinations(&board, sq("g1")).is_empty());
}
