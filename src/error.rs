//! Error types for move validation, computer turns and configuration

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Pos;
use crate::search::Cancelled;

/// A placement rejected at the boundary, before it reaches the search core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Pos),

    #[error("position {0} is already occupied")]
    Occupied(Pos),

    #[error("the game is already over")]
    GameOver,
}

/// Failure of a computer turn
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
