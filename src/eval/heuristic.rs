//! Line evaluation by sliding-window pattern matching
//!
//! A line is scored from Player One's point of view: patterns of Player One
//! stones add, patterns of Player Two stones subtract. The evaluating player
//! is the side about to move; for that side a 50-point pattern (a four, an
//! open three or a split four) is already a forced win, while for the other
//! side only an open four is.

use crate::board::{Cell, Player};

use super::patterns::{five_cell_score, six_cell_score, PatternScore};

/// Evaluate one full line, border cells included at both ends.
///
/// Returns a score in `[-FORCED_WIN, FORCED_WIN]`; exactly `±FORCED_WIN` means
/// the line already holds a forced win for Player One (`+`) or Player Two (`-`).
#[must_use]
pub fn evaluate_line(cells: &[Cell], player: Player) -> i32 {
    let mut line: Vec<i8> = cells.iter().map(|cell| cell.value()).collect();
    let len = line.len();
    if len < 2 {
        return 0;
    }

    let Some(first) = (1..len - 1).find(|&i| line[i] != 0) else {
        return 0;
    };
    let last = (1..len - 1).rev().find(|&i| line[i] != 0).unwrap_or(first);

    // Each end reads as blocked for the side owning the nearest stone
    line[0] = -line[first];
    line[len - 1] = -line[last];

    let mut score = 0;
    let mut start = 0;
    while start + 6 <= len {
        let window = &line[start..start + 6];
        let flipped: Vec<i8> = window.iter().map(|v| -v).collect();

        let own = six_cell_score(window);
        if saturates(own, Player::One, player) {
            return PatternScore::FORCED_WIN;
        }
        score += own;

        let other = six_cell_score(&flipped);
        if saturates(other, Player::Two, player) {
            return -PatternScore::FORCED_WIN;
        }
        score -= other;

        let own_split = five_cell_score(&window[1..]);
        let other_split = five_cell_score(&flipped[1..]);
        if own_split != 0 || other_split != 0 {
            if saturates(own_split, Player::One, player) {
                return PatternScore::FORCED_WIN;
            }
            if saturates(other_split, Player::Two, player) {
                return -PatternScore::FORCED_WIN;
            }
            score += own_split - other_split;
            // Skip the next window so the same split four is not counted twice
            start += 1;
        }
        start += 1;
    }

    score
}

/// Whether a pattern worth `points` for `side` is already a forced win when
/// `to_move` is about to play.
#[inline]
fn saturates(points: i32, side: Player, to_move: Player) -> bool {
    points == PatternScore::OPEN_FOUR || (points == PatternScore::FOUR && side == to_move)
}
