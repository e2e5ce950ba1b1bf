//! Game session: turn order, move history and result tracking
//!
//! A [`Game`] drives one match between two sides, either of which may be
//! played by the engine. Player One moves first.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::board::{Board, Player, Pos};
use crate::config::GameConfig;
use crate::engine::AIEngine;
use crate::error::{ConfigError, MoveError, TurnError};
use crate::rules::{has_won, validate_move};
use crate::search::{CancelToken, SearchResult};

/// Game status after the latest move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { to_move: Player },
    /// `line_end` is the stone that completed the run
    Won { winner: Player, line_end: Pos },
    /// Board full without a winner
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Outcome of a computer turn
#[derive(Debug, Clone)]
pub struct AiTurn {
    pub pos: Pos,
    pub status: GameStatus,
    pub search: SearchResult,
}

pub struct Game {
    config: GameConfig,
    board: Board,
    engine: AIEngine,
    history: Vec<Pos>,
    /// Moves already fed to the engine's score cache
    observed: usize,
    status: GameStatus,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let engine = AIEngine::new(config)?;
        Ok(Self {
            config,
            board: Board::new(config.rows, config.columns),
            engine,
            history: Vec::new(),
            observed: 0,
            status: GameStatus::InProgress { to_move: Player::One },
        })
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves in play order; colours alternate starting with Player One
    #[inline]
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    #[inline]
    pub fn pieces_placed(&self) -> usize {
        self.history.len()
    }

    /// Side to move, or `None` once the game is over
    pub fn to_move(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress { to_move } => Some(to_move),
            _ => None,
        }
    }

    /// Token that aborts the engine's current or next search
    pub fn cancel_token(&self) -> CancelToken {
        self.engine.cancel_token()
    }

    /// Place a stone for the side to move
    pub fn play(&mut self, pos: Pos) -> Result<GameStatus, MoveError> {
        let player = self.to_move().ok_or(MoveError::GameOver)?;
        validate_move(&self.board, pos)?;

        self.board.place_stone(pos, player);
        self.history.push(pos);
        info!(%player, %pos, pieces = self.history.len(), "move played");

        self.status = if has_won(&self.board, pos, player, self.config.win_count) {
            info!(winner = %player, "game won");
            GameStatus::Won {
                winner: player,
                line_end: pos,
            }
        } else if self.history.len() == self.config.capacity() {
            info!("board full, game drawn");
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                to_move: player.opponent(),
            }
        };
        Ok(self.status)
    }

    /// Search for the side to move without playing the result
    pub fn suggest(&mut self) -> Result<SearchResult, TurnError> {
        let player = self.to_move().ok_or(MoveError::GameOver)?;

        // Feed the cache every stone except the last; the leaves rescore that one
        let last_index = self.history.len().saturating_sub(1);
        let pending = &self.history[self.observed..last_index];
        self.engine.observe(&self.board, pending);
        self.observed = last_index;

        let last = &self.history[last_index..];
        Ok(self
            .engine
            .best_move(&self.board, player, last, self.history.len())?)
    }

    /// Let the engine choose and play a move for the side to move.
    ///
    /// A cancelled search leaves the game exactly as it was.
    pub fn play_ai(&mut self) -> Result<AiTurn, TurnError> {
        let search = self.suggest()?;
        let pos = search.best_move.ok_or(MoveError::GameOver)?;
        let status = self.play(pos)?;
        Ok(AiTurn {
            pos,
            status,
            search,
        })
    }

    /// [`play_ai`](Self::play_ai) with a think limit.
    ///
    /// Clears any earlier cancellation, then raises the token from a timer
    /// thread if the search is still running after `limit`. The token is
    /// cleared again once the turn is over, so a timer that fires just as the
    /// search finishes cannot abort the next turn.
    pub fn play_ai_within(&mut self, limit: Duration) -> Result<AiTurn, TurnError> {
        let cancel = self.cancel_token();
        cancel.reset();

        let (done_tx, done_rx) = mpsc::channel::<()>();
        let timer_cancel = cancel.clone();
        let timer = thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = done_rx.recv_timeout(limit) {
                warn!(limit_ms = limit.as_millis() as u64, "think limit reached");
                timer_cancel.cancel();
            }
        });

        let turn = self.play_ai();
        // The timer exits as soon as the sender is gone
        drop(done_tx);
        if timer.join().is_err() {
            warn!("timer thread panicked");
        }
        cancel.reset();
        turn
    }
}
