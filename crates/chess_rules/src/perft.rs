use crate::board::Board;
use crate::movegen::legal_moves;

/// Perft node count.
/// Counts all positions reachable by legal moves from `board` in exactly
/// `depth` plies, each promotion choice separately.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.clone();
        if child.make_move(mv.from, mv.to, mv.promotion).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Node count below each root move, for locating generator bugs.
pub fn divide(board: &Board, depth: u8) -> Vec<(String, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for mv in legal_moves(board) {
        let mut child = board.clone();
        if child.make_move(mv.from, mv.to, mv.promotion).is_ok() {
            let label = match mv.promotion {
                Some(kind) => format!("{} {} {kind}", mv.from, mv.to),
                None => format!("{} {}", mv.from, mv.to),
            };
            out.push((label, perft(&child, depth - 1)));
        }
    }
    out
}
