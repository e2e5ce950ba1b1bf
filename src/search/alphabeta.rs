//! Minimax search with alpha-beta pruning
//!
//! Player One maximises, Player Two minimises; every score is from Player
//! One's point of view. Each node expands at most `minimax_width` candidates
//! from the spiral generator around the last move, recursing on a private copy
//! of the board. Leaves are scored through a copy of the [`ScoreCache`]
//! updated with the moves played since the root.
//!
//! # Scores
//!
//! - `±FORCED_WIN` (10 000): a side has won, or a line already holds a forced win
//! - `±PRUNE_BOUND` (100 000): returned by a node cut off by alpha-beta; it only
//!   tells the parent "no better than its current bound"
//!
//! # Example
//!
//! ```
//! use five_in_a_row::board::{Board, LineIndex, Player, Pos};
//! use five_in_a_row::eval::ScoreCache;
//! use five_in_a_row::search::{CancelToken, Searcher};
//! use five_in_a_row::GameConfig;
//!
//! let config = GameConfig { minimax_depth: 2, minimax_width: 8, ..GameConfig::default() };
//! let index = LineIndex::new(config.rows, config.columns, config.win_count);
//! let cancel = CancelToken::new();
//!
//! let board = Board::new(config.rows, config.columns).with_stone(Pos::new(5, 5), Player::One);
//! let cache = ScoreCache::from_board(&board, &index);
//!
//! let mut searcher = Searcher::new(&config, &index, &cancel);
//! let result = searcher.search(&board, Player::Two, &[Pos::new(5, 5)], 1, &cache).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use tracing::{debug, instrument};

use crate::board::{Board, LineIndex, Player, Pos};
use crate::config::GameConfig;
use crate::eval::{PatternScore, ScoreCache};
use crate::rules::has_won;

use super::{CancelToken, Cancelled, Candidates};

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root included
    pub nodes: u64,
    /// Nodes scored by the heuristic
    pub leaves: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Nodes ended by a completed winning run
    pub wins_found: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` only when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Evaluation of the root, Player One positive
    pub score: i32,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Value of a node and the move that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scored {
    score: i32,
    pos: Option<Pos>,
}

/// Depth-first alpha-beta searcher over one root position.
pub struct Searcher<'a> {
    index: &'a LineIndex,
    cancel: &'a CancelToken,
    win_count: usize,
    max_depth: usize,
    width: usize,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(config: &GameConfig, index: &'a LineIndex, cancel: &'a CancelToken) -> Self {
        Self {
            index,
            cancel,
            win_count: config.win_count,
            max_depth: config.minimax_depth,
            width: config.minimax_width,
            stats: SearchStats::default(),
        }
    }

    /// Find the best move for `player`.
    ///
    /// `history` must end with the opponent's last move: it is the spiral
    /// origin and the first position the leaves rescore. `cache` must be up to
    /// date for every move before it. Neither the board nor the cache is
    /// modified.
    #[instrument(skip_all, fields(player = %player, pieces = pieces_placed))]
    pub fn search(
        &mut self,
        board: &Board,
        player: Player,
        history: &[Pos],
        pieces_placed: usize,
        cache: &ScoreCache,
    ) -> Result<SearchResult, Cancelled> {
        self.stats = SearchStats::default();

        let Some(&origin) = history.last() else {
            return Ok(SearchResult {
                best_move: None,
                score: cache.total(player),
                stats: self.stats.clone(),
            });
        };

        let mut path = history.to_vec();
        let root = self.minimax(
            board,
            player,
            &mut path,
            pieces_placed,
            cache,
            -PatternScore::PRUNE_BOUND,
            PatternScore::PRUNE_BOUND,
            1,
        )?;

        // No improving child (or the root itself was terminal): fall back to
        // the nearest empty cell.
        let best_move = root
            .pos
            .filter(|&pos| board.is_empty(pos))
            .or_else(|| Candidates::around(board, origin).next());

        debug!(
            score = root.score,
            best_move = ?best_move,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            cutoffs = self.stats.cutoffs,
            "search complete"
        );

        Ok(SearchResult {
            best_move,
            score: root.score,
            stats: self.stats.clone(),
        })
    }

    /// Statistics of the last search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &Board,
        player: Player,
        path: &mut Vec<Pos>,
        pieces: usize,
        cache: &ScoreCache,
        mut alpha: i32,
        mut beta: i32,
        depth: usize,
    ) -> Result<Scored, Cancelled> {
        if self.cancel.is_cancelled() {
            return Err(Cancelled);
        }
        self.stats.nodes += 1;

        let Some(&last) = path.last() else {
            return Ok(Scored {
                score: cache.total(player),
                pos: None,
            });
        };

        // The previous mover may have just completed a run
        let mover = player.opponent();
        if has_won(board, last, mover, self.win_count) {
            self.stats.wins_found += 1;
            return Ok(Scored {
                score: mover.sign() * PatternScore::FORCED_WIN,
                pos: Some(last),
            });
        }

        let budget = self.width.min(board.capacity().saturating_sub(pieces));
        if depth >= self.max_depth || budget == 0 {
            self.stats.leaves += 1;
            let mut leaf = cache.clone();
            let score = leaf.eval(board, self.index, player, path);
            return Ok(Scored {
                score,
                pos: Some(last),
            });
        }

        let mut best = None;
        for candidate in Candidates::around(board, last).take(budget) {
            let child = board.with_stone(candidate, player);
            path.push(candidate);
            let result = self.minimax(
                &child,
                player.opponent(),
                path,
                pieces + 1,
                cache,
                alpha,
                beta,
                depth + 1,
            );
            path.pop();
            let value = result?.score;

            match player {
                Player::One if value > alpha => {
                    alpha = value;
                    best = Some(candidate);
                }
                Player::Two if value < beta => {
                    beta = value;
                    best = Some(candidate);
                }
                _ => {}
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                return Ok(Scored {
                    score: player.sign() * PatternScore::PRUNE_BOUND,
                    pos: Some(candidate),
                });
            }
        }

        let score = match player {
            Player::One => alpha,
            Player::Two => beta,
        };
        Ok(Scored { score, pos: best })
    }
}
