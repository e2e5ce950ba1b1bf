//! Command-line interface for the text front end.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::board::Pos;
use crate::config::GameConfig;

/// Five in a row against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "five_in_a_row")]
#[command(about = "Five in a row with an alpha-beta search opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Log search details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct EngineArgs {
    /// TOML file with board size and search limits
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the search depth
    #[arg(long, global = true)]
    pub depth: Option<usize>,

    /// Override the number of candidates examined per node
    #[arg(long, global = true)]
    pub width: Option<usize>,
}

impl EngineArgs {
    /// Load the config file (or defaults) and apply the overrides
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.minimax_depth = depth;
        }
        if let Some(width) = self.width {
            config.minimax_width = width;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Two humans, no computer opponent
        #[arg(long)]
        two_player: bool,

        /// Let the computer take Player 1
        #[arg(long, conflicts_with = "two_player")]
        ai_first: bool,

        /// Abort the computer's search after this many milliseconds
        #[arg(long)]
        think_limit_ms: Option<u64>,
    },

    /// Replay moves and print the engine's suggestion for the side to move
    Analyze {
        /// Moves as space-separated `row,col` pairs, Player 1 first
        #[arg(long, default_value = "")]
        moves: String,
    },
}

/// Parse one position from `r,c` or `r c`
pub fn parse_pos(text: &str) -> Result<Pos> {
    let mut parts = text
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty());
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected `row,col`, got `{text}`");
    };
    let row: u8 = row.parse().with_context(|| format!("bad row in `{text}`"))?;
    let col: u8 = col.parse().with_context(|| format!("bad column in `{text}`"))?;
    Ok(Pos::new(row, col))
}

/// Parse a space-separated list of `row,col` pairs
pub fn parse_moves(text: &str) -> Result<Vec<Pos>> {
    text.split_whitespace().map(parse_pos).collect()
}
