//! Computer opponent
//!
//! [`AIEngine`] owns everything that outlives a single search: the
//! configuration, the line index, the persistent score cache and the
//! cancellation token shared with the caller. Each call to
//! [`AIEngine::best_move`] runs one [`Searcher`] over a borrowed board.
//!
//! # Example
//!
//! ```
//! use five_in_a_row::{AIEngine, Board, GameConfig, Player, Pos};
//!
//! let config = GameConfig { minimax_depth: 2, minimax_width: 8, ..GameConfig::default() };
//! let mut engine = AIEngine::new(config).unwrap();
//!
//! let board = Board::new(10, 10).with_stone(Pos::new(5, 5), Player::One);
//! engine.observe(&board, &[Pos::new(5, 5)]);
//!
//! let result = engine.best_move(&board, Player::Two, &[Pos::new(5, 5)], 1).unwrap();
//! println!("Play at {:?} (score {})", result.best_move, result.score);
//! ```

use tracing::{debug, instrument, warn};

use crate::board::{Board, LineIndex, Player, Pos};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::eval::ScoreCache;
use crate::search::{CancelToken, Cancelled, Candidates, SearchResult, SearchStats, Searcher};

/// Search engine with a score cache that persists between moves.
///
/// The cache must reflect every stone on the board before the last move
/// passed to [`best_move`](Self::best_move). Keep it current with
/// [`observe`](Self::observe) after each placement, or call
/// [`resync`](Self::resync) after loading an arbitrary position.
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: GameConfig,
    index: LineIndex,
    cache: ScoreCache,
    cancel: CancelToken,
}

impl AIEngine {
    /// Build an engine for `config` with an all-zero cache.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let index = LineIndex::new(config.rows, config.columns, config.win_count);
        let cache = ScoreCache::new(index.len());
        Ok(Self {
            config,
            index,
            cache,
            cancel: CancelToken::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn index(&self) -> &LineIndex {
        &self.index
    }

    #[inline]
    pub fn cache(&self) -> &ScoreCache {
        &self.cache
    }

    /// Handle for aborting a running search from another thread.
    ///
    /// A cancelled token stays cancelled until [`CancelToken::reset`].
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Rescore the lines through newly placed stones
    pub fn observe(&mut self, board: &Board, positions: &[Pos]) {
        self.cache.update(board, &self.index, positions);
    }

    /// Rescore every line of `board`
    pub fn resync(&mut self, board: &Board) {
        self.cache.rebuild(board, &self.index);
        debug!(lines = self.cache.len(), "score cache rebuilt");
    }

    /// Search for `player`'s best reply.
    ///
    /// `history` ends with the opponent's last move. Every entry is rescored at
    /// each leaf, so pass only the moves the cache has not seen. With no
    /// history the centre cell (or the nearest empty cell to it) is returned
    /// unsearched.
    #[instrument(skip(self, board, history), fields(last = ?history.last()))]
    pub fn best_move(
        &self,
        board: &Board,
        player: Player,
        history: &[Pos],
        pieces_placed: usize,
    ) -> Result<SearchResult, Cancelled> {
        if history.is_empty() {
            let center = board.center();
            // A loaded position may already have the centre taken
            let best_move = if board.is_empty(center) {
                Some(center)
            } else {
                Candidates::around(board, center).next()
            };
            debug!(?best_move, "opening move");
            return Ok(SearchResult {
                best_move,
                score: self.cache.total(player),
                stats: SearchStats::default(),
            });
        }

        let mut searcher = Searcher::new(&self.config, &self.index, &self.cancel);
        let result = searcher.search(board, player, history, pieces_placed, &self.cache);
        if result.is_err() {
            warn!(nodes = searcher.stats().nodes, "search cancelled");
        }
        result
    }
}
