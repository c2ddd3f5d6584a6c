//! Referee CLI
//!
//! Replay, inspect and play games under the `chess_rules` engine.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use chess_rules::{Game, Player};
use clap::{Parser, Subcommand};
use referee::{RefereeConfig, SelfPlayRunner, load_game, print_report, save_record};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "referee", version, about = "Chess rules referee")]
struct Cli {
    /// TOML config file (defaults to ./referee.toml when present)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a stored record and print the position
    Replay {
        record: PathBuf,
        /// Stop after this many moves
        #[arg(long)]
        upto: Option<usize>,
    },
    /// Play a game at the terminal
    Play {
        /// Write the record here when the session ends
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Random self-play
    Selfplay {
        #[arg(long, short)]
        games: Option<u32>,
        #[arg(long)]
        max_moves: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List legal destinations for the piece on a square of a stored game
    Moves { record: PathBuf, square: String },
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = RefereeConfig::resolve(cli.config.as_deref())?;
    init_tracing(&config.log_level);

    match cli.command {
        Command::Replay { record, upto } => replay(&record, upto),
        Command::Play { save } => play(&config, save.as_deref()),
        Command::Selfplay {
            games,
            max_moves,
            seed,
        } => {
            let mut settings = config.selfplay;
            settings.games = games.unwrap_or(settings.games);
            settings.max_moves = max_moves.unwrap_or(settings.max_moves);
            settings.seed = seed.or(settings.seed);
            selfplay(settings)
        }
        Command::Moves { record, square } => {
            let game = load_game(&record)?;
            let destinations = game.possible_moves(&square)?;
            if destinations.is_empty() {
                println!("{square}: no legal moves");
            } else {
                println!("{square}: {}", destinations.join(" "));
            }
            Ok(())
        }
    }
}

fn replay(path: &Path, upto: Option<usize>) -> anyhow::Result<()> {
    let game = load_game(path)?;
    match upto {
        Some(n) => {
            let board = game.board_at(n)?;
            println!("After {} of {} moves:\n", n.min(game.moves().len()), game.moves().len());
            println!("{board}");
        }
        None => print_report(&game),
    }
    Ok(())
}

fn selfplay(settings: referee::SelfPlayConfig) -> anyhow::Result<()> {
    info!(
        games = settings.games,
        max_moves = settings.max_moves,
        seed = ?settings.seed,
        "starting self-play"
    );
    let start = Instant::now();
    let summary = SelfPlayRunner::new(settings).run()?;

    println!("=== Self-play: {} games ===", summary.games);
    println!("White wins:  {}", summary.white_wins);
    println!("Black wins:  {}", summary.black_wins);
    println!("Stalemates:  {}", summary.stalemates);
    println!("Unfinished:  {}", summary.unfinished);
    println!(
        "Plies:       {} ({:.1}s)",
        summary.plies,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  <from> <to> [PIECE]  move, e.g. 'e2 e4' or 'a7 a8 QUEEN'");
    println!("  moves <square>       legal destinations for a piece");
    println!("  board                show the position");
    println!("  resign               resign for the side to move");
    println!("  draw                 offer a draw");
    println!("  accept | refuse      answer a pending draw offer");
    println!("  quit                 leave the session");
}

/// Interactive session. Both players share the terminal; every command is
/// issued on behalf of the player to move.
fn play(config: &RefereeConfig, save: Option<&Path>) -> anyhow::Result<()> {
    let mut game = Game::new(
        Player::new(1, config.players.white.clone()),
        Player::new(2, config.players.black.clone()),
    );
    print_help();
    println!("\n{}", game.board());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut turn_started = Instant::now();

    loop {
        if game.board().is_finished() {
            break;
        }
        let player = game.player_to_move().clone();
        print!("{} ({})> ", player.name, game.board().turn());
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read stdin")?;
        let command = line.trim();

        let outcome = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "board" => {
                println!("{}", game.board());
                continue;
            }
            "resign" => game.resign(game.board().turn()),
            "draw" => game.offer_draw(player.id).map(|()| {
                println!("{} offers a draw", player.name);
            }),
            "accept" => game.accept_draw(player.id),
            "refuse" => game.refuse_draw().map(|()| println!("Draw offer refused")),
            _ => {
                if let Some(square) = command.strip_prefix("moves ") {
                    match game.possible_moves(square.trim()) {
                        Ok(destinations) => println!("{}", destinations.join(" ")),
                        Err(e) => println!("{e}"),
                    }
                    continue;
                }
                let elapsed_ms = turn_started.elapsed().as_millis() as u64;
                game.submit(command, player.id, elapsed_ms).map(|mv| {
                    turn_started = Instant::now();
                    println!("\n{}", game.board());
                    if game.board().in_check() && !game.board().is_finished() {
                        println!("Check!");
                    }
                    info!(%mv, "move played");
                })
            }
        };

        if let Err(e) = outcome {
            println!("{e}");
        }
    }

    print_report(&game);

    if let Some(path) = save {
        match save_record(&game, path) {
            Ok(()) => println!("Record saved to {}", path.display()),
            Err(e) => {
                warn!(error = %e, "could not save record");
                return Err(e);
            }
        }
    }
    Ok(())
}
