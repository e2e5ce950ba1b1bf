//! Five-in-a-row AI engine
//!
//! Search core for a two-player connection game: players alternately place
//! stones on a rectangular grid and the first to align `win_count` stones in a
//! row, column or diagonal wins.
//!
//! # Architecture
//!
//! - [`board`]: grid with a sentinel border, line index
//! - [`rules`]: placement validation and win detection
//! - [`eval`]: pattern tables, line evaluator and incremental score cache
//! - [`search`]: spiral candidate generator, minimax with alpha-beta pruning,
//!   cooperative cancellation
//! - [`engine`]: [`AIEngine`] holding the state that persists between searches
//! - [`game`]: [`Game`] session with turn order and results
//! - [`config`]: [`GameConfig`] loaded from TOML
//!
//! # Quick Start
//!
//! ```
//! use five_in_a_row::{Game, GameConfig, GameStatus, Player, Pos};
//!
//! let config = GameConfig { minimax_depth: 2, minimax_width: 8, ..GameConfig::default() };
//! let mut game = Game::new(config).unwrap();
//!
//! game.play(Pos::new(5, 5)).unwrap();
//! let turn = game.play_ai().unwrap();
//! println!("AI plays at {}", turn.pos);
//! assert_eq!(turn.status, GameStatus::InProgress { to_move: Player::One });
//! ```
//!
//! # Scores
//!
//! Every score is from Player One's point of view: positive favours Player One,
//! who maximises; Player Two minimises. `±10 000` marks a won or forced-win
//! position and `±100 000` a pruned subtree.

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, LineIndex, Player, Pos};
pub use config::GameConfig;
pub use engine::AIEngine;
pub use error::{ConfigError, MoveError, TurnError};
pub use game::{AiTurn, Game, GameStatus};
pub use search::{CancelToken, Cancelled, SearchResult, SearchStats};
