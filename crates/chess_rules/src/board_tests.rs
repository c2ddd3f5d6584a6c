use super::*;
use crate::notation::MoveInput;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play(board: &mut Board, text: &str) -> Result<Move, MoveError> {
    let input: MoveInput = text.parse().unwrap();
    board.make_move(input.from, input.to, input.promotion)
}

fn play_all(board: &mut Board, moves: &[&str]) -> Vec<Move> {
    moves
        .iter()
        .map(|m| play(board, m).unwrap_or_else(|e| panic!("{m}: {e}")))
        .collect()
}

#[test]
fn test_commit_relocates_and_counts() {
    let mut board = Board::new();
    let mv = play(&mut board, "e2 e4").unwrap();
    assert_eq!(mv.effect, MoveEffect::Quiet);
    // The move keeps the snapshot from before it was made
    assert_eq!(mv.piece.move_count, 0);
    assert_eq!(board.piece_at(sq("e2")), None);
    assert_eq!(board.piece_at(sq("e4")).unwrap().move_count, 1);
    assert_eq!(board.turn(), Color::Black);
    assert_eq!(board.last_move(), Some(&mv));
}

#[test]
fn test_rejected_move_changes_nothing() {
    let mut board = Board::new();
    play(&mut board, "e2 e4").unwrap();
    let before = board.clone();

    assert_eq!(play(&mut board, "f8 c5"), Err(MoveError::PathBlocked));
    assert_eq!(play(&mut board, "e4 e5"), Err(MoveError::NotYourPiece));
    assert_eq!(play(&mut board, "d4 d5"), Err(MoveError::NotYourPiece));
    assert_eq!(play(&mut board, "d8 d6"), Err(MoveError::PathBlocked));
    assert_eq!(board, before);
}

#[test]
fn test_finish_is_final() {
    let mut board = Board::new();
    board.finish(Some(Color::Black), "White Resigned").unwrap();
    assert!(board.is_finished());
    assert_eq!(board.description(), "White Resigned");

    let err = play(&mut board, "e2 e4").unwrap_err();
    assert_eq!(
        err,
        MoveError::GameAlreadyOver {
            winner: Some(Color::Black)
        }
    );
    assert_eq!(err.to_string(), "Game is already over, Black won");
    assert!(board.finish(None, "Players agreed a Draw").is_err());
    assert_eq!(board.winner(), Some(Color::Black));
}

#[test]
fn test_en_passant_commit_removes_victim() {
    let mut board = Board::new();
    play_all(&mut board, &["e2 e4", "h7 h6", "e4 e5", "d7 d5"]);
    let mv = play(&mut board, "e5 d6").unwrap();
    assert_eq!(
        mv.effect,
        MoveEffect::EnPassant {
            captured_at: sq("d5")
        }
    );
    assert!(mv.is_capture());
    assert_eq!(board.piece_at(sq("d5")), None);
    assert!(board.piece_at(sq("d6")).unwrap().is(Color::White, PieceKind::Pawn));
    assert_eq!(board.captured_pieces().get(Color::Black, PieceKind::Pawn), 1);
}

#[test]
fn test_castle_commit_moves_rook() {
    let mut board = Board::new();
    play_all(&mut board, &["e2 e4", "e7 e5", "g1 f3", "b8 c6", "f1 c4", "g8 f6"]);
    let mv = play(&mut board, "e1 g1").unwrap();
    assert_eq!(
        mv.effect,
        MoveEffect::Castle {
            rook_from: sq("h1"),
            rook_to: sq("f1")
        }
    );
    let king = board.piece_at(sq("g1")).unwrap();
    let rook = board.piece_at(sq("f1")).unwrap();
    assert!(king.is(Color::White, PieceKind::King));
    assert!(rook.is(Color::White, PieceKind::Rook));
    assert_eq!((king.move_count, rook.move_count), (1, 1));
    assert_eq!(board.piece_at(sq("h1")), None);
}

#[test]
fn test_promotion_commit() {
    let mut board = Board::empty();
    board
        .put(sq("a1"), Piece::new(Color::White, PieceKind::King))
        .put(sq("h8"), Piece::new(Color::Black, PieceKind::King))
        .put(sq("c7"), Piece::new(Color::White, PieceKind::Pawn))
        .put(sq("d8"), Piece::new(Color::Black, PieceKind::Rook));

    assert_eq!(play(&mut board, "c7 c8"), Err(MoveError::PromotionRequired));
    let mv = play(&mut board, "c7 d8 KNIGHT").unwrap();
    assert_eq!(mv.promotion, Some(PieceKind::Knight));
    assert_eq!(
        mv.effect,
        MoveEffect::Capture {
            captured: PieceKind::Rook
        }
    );

    let knight = board.piece_at(sq("d8")).unwrap();
    assert!(knight.is(Color::White, PieceKind::Knight));
    assert_eq!(knight.move_count, 1);
    assert_eq!(board.created().get(Color::White, PieceKind::Knight), 1);
    assert_eq!(board.created().get(Color::White, PieceKind::Pawn), 1);

    let captured = board.captured_pieces();
    assert_eq!(captured.get(Color::Black, PieceKind::Rook), 1);
    // Promotion never decrements the pawn counter
    assert_eq!(captured.get(Color::White, PieceKind::Pawn), 1);
}

#[test]
fn test_promoted_piece_captured_counts_as_its_new_kind() {
    let mut board = Board::empty();
    board
        .put(sq("e1"), Piece::new(Color::White, PieceKind::King))
        .put(sq("h7"), Piece::new(Color::Black, PieceKind::King))
        .put(sq("a7"), Piece::new(Color::White, PieceKind::Pawn))
        .put(sq("b8"), Piece::new(Color::Black, PieceKind::Knight))
        .put(sq("h6"), Piece::new(Color::Black, PieceKind::Pawn));

    play(&mut board, "a7 a8 QUEEN").unwrap();
    play(&mut board, "b8 c6").unwrap();
    play(&mut board, "a8 a1").unwrap();
    play(&mut board, "c6 b4").unwrap();
    play(&mut board, "a1 a2").unwrap();
    play(&mut board, "b4 a2").unwrap();

    let captured = board.captured_pieces();
    assert_eq!(captured.get(Color::White, PieceKind::Queen), 1);
    assert_eq!(captured.get(Color::White, PieceKind::Pawn), 1);
    assert_eq!(captured.get(Color::Black, PieceKind::Knight), 0);
}

#[test]
fn test_captured_pieces_at_start() {
    let board = Board::new();
    let captured = board.captured_pieces();
    for color in [Color::White, Color::Black] {
        for kind in PieceTally::KINDS {
            assert_eq!(captured.get(color, kind), 0, "{color} {kind}");
        }
    }
    assert_eq!(board.created().get(Color::White, PieceKind::Pawn), 8);
    assert_eq!(board.created().get(Color::Black, PieceKind::Queen), 1);
    assert_eq!(board.created().get(Color::Black, PieceKind::King), 0);
}

#[test]
fn test_replay_matches_incremental() {
    let mut board = Board::new();
    let moves = play_all(
        &mut board,
        &["e2 e4", "d7 d5", "e4 d5", "d8 d5", "b1 c3", "d5 a5"],
    );
    let replayed = Board::from_moves(&moves).unwrap();
    assert_eq!(replayed, board);
}

#[test]
fn test_replay_reports_failing_index() {
    let mut board = Board::new();
    let mut moves = play_all(&mut board, &["e2 e4", "e7 e5"]);
    let mut bad = moves[0];
    bad.from = sq("e4");
    bad.to = sq("e5");
    moves.push(bad);
    let err = Board::from_moves(&moves).unwrap_err();
    assert_eq!(
        err,
        ReplayError::Move {
            index: 2,
            source: MoveError::PathBlocked
        }
    );
}

#[test]
fn test_glyphs_and_display() {
    let board = Board::new();
    assert_eq!(board.glyph_at(sq("e1")), '\u{2654}');
    assert_eq!(board.glyph_at(sq("d8")), '\u{265B}');
    assert_eq!(board.glyph_at(sq("e4")), ' ');

    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with('8'));
    assert!(lines[4].contains('.'));
    assert_eq!(lines[8].trim(), "a b c d e f g h");
}
