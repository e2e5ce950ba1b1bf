//! Five in a row on the terminal
//!
//! `play` runs an interactive game against the engine (or a second human);
//! `analyze` replays a move list and prints the engine's suggestion.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use five_in_a_row::cli::{parse_moves, parse_pos, Cli, Command};
use five_in_a_row::{AiTurn, Board, Cell, Game, GameConfig, GameStatus, Player, TurnError};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = cli.engine.resolve()?;
    info!(?config, "configuration loaded");

    match cli.command {
        Command::Play {
            two_player,
            ai_first,
            think_limit_ms,
        } => {
            let computer = if two_player {
                None
            } else if ai_first {
                Some(Player::One)
            } else {
                Some(Player::Two)
            };
            run_play(config, computer, think_limit_ms.map(Duration::from_millis))
        }
        Command::Analyze { moves } => run_analyze(config, &moves),
    }
}

/// Interactive loop; `computer` is the side played by the engine, if any
fn run_play(config: GameConfig, computer: Option<Player>, think_limit: Option<Duration>) -> Result<()> {
    let mut game = Game::new(config)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_board(game.board());
    while let GameStatus::InProgress { to_move } = game.status() {
        if computer == Some(to_move) {
            println!("{to_move} is thinking...");
            match computer_turn(&mut game, think_limit) {
                Ok(turn) => println!("{to_move} plays {} (score {})", turn.pos, turn.search.score),
                Err(TurnError::Cancelled(_)) => {
                    println!("Search aborted, leaving the game.");
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            print!("{to_move}, enter `row col` (or `quit`): ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            let input = line.trim();
            if input.eq_ignore_ascii_case("quit") {
                return Ok(());
            }
            let pos = match parse_pos(input) {
                Ok(pos) => pos,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };
            if let Err(err) = game.play(pos) {
                println!("{err}");
                continue;
            }
        }
        print_board(game.board());
    }

    match game.status() {
        GameStatus::Won { winner, line_end } => println!("{winner} wins with {line_end}!"),
        GameStatus::Draw => println!("Board full: draw."),
        GameStatus::InProgress { .. } => {}
    }
    Ok(())
}

/// Run one engine turn, aborting it after `limit` if one is set
fn computer_turn(game: &mut Game, limit: Option<Duration>) -> Result<AiTurn, TurnError> {
    match limit {
        Some(limit) => game.play_ai_within(limit),
        None => game.play_ai(),
    }
}

fn run_analyze(config: GameConfig, moves: &str) -> Result<()> {
    let mut game = Game::new(config)?;
    for pos in parse_moves(moves)? {
        game.play(pos)?;
    }
    print_board(game.board());

    match game.status() {
        GameStatus::InProgress { to_move } => {
            let result = game.suggest()?;
            match result.best_move {
                Some(pos) => println!("{to_move} to move: suggest {pos}, score {}", result.score),
                None => println!("{to_move} to move: no empty cell"),
            }
            println!(
                "nodes {}, leaves {}, cutoffs {}, wins found {}",
                result.stats.nodes, result.stats.leaves, result.stats.cutoffs, result.stats.wins_found
            );
        }
        GameStatus::Won { winner, line_end } => println!("{winner} has already won at {line_end}"),
        GameStatus::Draw => println!("The game is drawn"),
    }
    Ok(())
}

fn print_board(board: &Board) {
    print!("   ");
    for c in 1..=board.columns() {
        print!("{:3}", c);
    }
    println!();

    for pos in board.positions() {
        if pos.col == 1 {
            print!("{:3}", pos.row);
        }
        let ch = match board.get(pos) {
            Cell::Stone(Player::One) => "  X",
            Cell::Stone(Player::Two) => "  O",
            _ => "  .",
        };
        print!("{}", ch);
        if usize::from(pos.col) == board.columns() {
            println!();
        }
    }
}
