//! Incremental per-line score cache
//!
//! One slot per scoring line, holding the line's score for both possible
//! evaluating players. After a move only the lines through the changed
//! positions are rescored; the board value is the sum over all slots.

use crate::board::{Board, LineIndex, Player, Pos};

use super::heuristic::evaluate_line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCache {
    /// `[score with Player One to move, score with Player Two to move]`
    slots: Vec<[i32; 2]>,
}

impl ScoreCache {
    /// Zeroed cache, correct for an empty board
    pub fn new(lines: usize) -> Self {
        Self {
            slots: vec![[0; 2]; lines],
        }
    }

    /// Cache rebuilt from scratch for an arbitrary board
    pub fn from_board(board: &Board, index: &LineIndex) -> Self {
        let mut cache = Self::new(index.len());
        cache.rebuild(board, index);
        cache
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Cached score of one slot for the given evaluating player
    #[inline]
    pub fn slot(&self, line: usize, player: Player) -> i32 {
        self.slots[line][player.index()]
    }

    /// Rescore the lines through `positions`
    pub fn update(&mut self, board: &Board, index: &LineIndex, positions: &[Pos]) {
        for line in index.get_indices(positions) {
            let cells = board.cells_along(line.start, line.direction);
            self.slots[line.id.index()] = [
                evaluate_line(&cells, Player::One),
                evaluate_line(&cells, Player::Two),
            ];
        }
    }

    /// Rescore every line
    pub fn rebuild(&mut self, board: &Board, index: &LineIndex) {
        for line in index.lines() {
            let cells = board.cells_along(line.start, line.direction);
            self.slots[line.id.index()] = [
                evaluate_line(&cells, Player::One),
                evaluate_line(&cells, Player::Two),
            ];
        }
    }

    /// Board value for `player` to move: the sum of all slots
    pub fn total(&self, player: Player) -> i32 {
        self.slots.iter().map(|slot| slot[player.index()]).sum()
    }

    /// Rescore the lines through `changed` and return the board value for `player`.
    ///
    /// The caller passes only the positions changed since the cache was last
    /// brought up to date.
    pub fn eval(&mut self, board: &Board, index: &LineIndex, player: Player, changed: &[Pos]) -> i32 {
        self.update(board, index, changed);
        self.total(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    fn setup() -> (Board, LineIndex, ScoreCache) {
        let index = LineIndex::new(10, 10, 5);
        let cache = ScoreCache::new(index.len());
        (Board::new(10, 10), index, cache)
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let (board, index, mut cache) = setup();
        assert_eq!(cache.len(), 42);
        assert_eq!(cache.eval(&board, &index, Player::One, &[]), 0);
        assert_eq!(ScoreCache::from_board(&board, &index), cache);
    }

    #[test]
    fn test_incremental_matches_rebuild() {
        let (mut board, index, mut cache) = setup();
        let moves = [
            (Pos::new(5, 5), Player::One),
            (Pos::new(5, 6), Player::Two),
            (Pos::new(4, 4), Player::One),
            (Pos::new(6, 6), Player::Two),
            (Pos::new(3, 3), Player::One),
            (Pos::new(4, 6), Player::Two),
            (Pos::new(6, 4), Player::One),
            (Pos::new(10, 1), Player::Two),
        ];

        for (pos, player) in moves {
            board.place_stone(pos, player);
            for evaluating in [Player::One, Player::Two] {
                let incremental = cache.eval(&board, &index, evaluating, &[pos]);
                let fresh = ScoreCache::from_board(&board, &index);
                assert_eq!(incremental, fresh.total(evaluating), "after {pos}");
                assert_eq!(cache, fresh, "stale slot after {pos}");
            }
        }
    }

    #[test]
    fn test_batched_changes_match_rebuild() {
        let (mut board, index, mut cache) = setup();
        let placed = [Pos::new(2, 2), Pos::new(2, 3), Pos::new(7, 8), Pos::new(8, 8)];
        board.place_stone(placed[0], Player::One);
        board.place_stone(placed[1], Player::One);
        board.place_stone(placed[2], Player::Two);
        board.place_stone(placed[3], Player::Two);

        let value = cache.eval(&board, &index, Player::Two, &placed);
        assert_eq!(value, ScoreCache::from_board(&board, &index).total(Player::Two));
    }

    #[test]
    fn test_forced_win_shows_in_total() {
        let (mut board, index, mut cache) = setup();
        let stones: Vec<Pos> = (1..=4).map(|c| Pos::new(3, c)).collect();
        for &pos in &stones {
            board.place_stone(pos, Player::One);
        }
        let value = cache.eval(&board, &index, Player::One, &stones);
        assert!(value >= PatternScore::FORCED_WIN, "value {value}");
        // Row 3 is slot 2
        assert_eq!(cache.slot(2, Player::One), PatternScore::FORCED_WIN);
    }

    #[test]
    fn test_clone_isolates_branches() {
        let (mut board, index, mut cache) = setup();
        board.place_stone(Pos::new(5, 5), Player::One);
        cache.update(&board, &index, &[Pos::new(5, 5)]);

        let mut branch = cache.clone();
        let child = board.with_stone(Pos::new(5, 6), Player::One);
        branch.update(&child, &index, &[Pos::new(5, 6)]);

        assert_ne!(branch, cache);
        assert_eq!(cache, ScoreCache::from_board(&board, &index));
    }
}
