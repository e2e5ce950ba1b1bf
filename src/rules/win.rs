//! Win condition checking
//!
//! A placement wins when it completes `win_count` or more stones in a row
//! along any of the four axes. Overlines count.

use crate::board::{Board, Cell, Direction, Player, Pos};

/// Check whether the stone just played at `pos` completes a winning run for `player`.
///
/// Only meaningful for the player who just moved. The border sentinels stop
/// every scan from an interior cell; positions outside the interior never win.
#[inline]
pub fn has_won(board: &Board, pos: Pos, player: Player, win_count: usize) -> bool {
    if !board.contains(pos) {
        return false;
    }
    Direction::ALL
        .iter()
        .any(|&direction| run_length(board, pos, direction, player) >= win_count)
}

/// Length of the run of `player` stones through `pos` along `direction`,
/// counting `pos` itself and extending both ways.
/// Zero for positions outside the interior.
pub fn run_length(board: &Board, pos: Pos, direction: Direction, player: Player) -> usize {
    if !board.contains(pos) {
        return 0;
    }
    let (dr, dc) = direction.delta();
    1 + count_from(board, pos, dr, dc, player) + count_from(board, pos, -dr, -dc, player)
}

fn count_from(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> usize {
    let mut count = 0;
    let mut next = pos.shifted(dr, dc, 1);
    while board.get(next) == Cell::Stone(player) {
        count += 1;
        next = next.shifted(dr, dc, 1);
    }
    count
}
