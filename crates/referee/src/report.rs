//! Plain-text game reports

use chess_rules::{Color, Game, GameStatus, PieceTally};

/// Render the board, players, status and bookkeeping of a game.
pub fn generate_report(game: &Game) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "=== {} (White) vs {} (Black) ===\n\n",
        game.white().name,
        game.black().name
    ));
    report.push_str(&game.board().to_string());
    report.push_str("\n\n");

    match game.status() {
        GameStatus::Ongoing => {
            let check = if game.board().in_check() { ", in check" } else { "" };
            report.push_str(&format!(
                "Status: {} to move ({}){}\n",
                game.board().turn(),
                game.player_to_move().name,
                check
            ));
        }
        GameStatus::Finished(reason) => {
            let winner = match game.winner() {
                Some(player) => format!("{} wins", player.name),
                None => "no winner".to_string(),
            };
            report.push_str(&format!("Status: {}, {}\n", reason.description(), winner));
        }
    }

    let clocks = game.clock_totals();
    report.push_str(&format!(
        "Time used: White {:.1}s, Black {:.1}s\n",
        clocks.white_ms as f64 / 1000.0,
        clocks.black_ms as f64 / 1000.0
    ));

    let captured = game.board().captured_pieces();
    for color in [Color::White, Color::Black] {
        report.push_str(&format!("Captured {}: {}\n", color, tally_line(&captured, color)));
    }

    report.push_str(&format!("\nMoves ({}):\n", game.moves().len()));
    for (pair, moves) in game.moves().chunks(2).enumerate() {
        let black = moves.get(1).map(|mv| mv.to_string()).unwrap_or_default();
        report.push_str(&format!("{:>3}. {:<16} {}\n", pair + 1, moves[0].to_string(), black));
    }

    report
}

pub fn print_report(game: &Game) {
    println!("{}", generate_report(game));
}

fn tally_line(tally: &PieceTally, color: Color) -> String {
    let parts: Vec<String> = PieceTally::KINDS
        .iter()
        .filter(|&&kind| tally.get(color, kind) > 0)
        .map(|&kind| format!("{} x{}", kind, tally.get(color, kind)))
        .collect();
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
