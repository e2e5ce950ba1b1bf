//! Board representation for five in a row

pub mod board;
pub mod lines;

#[cfg(test)]
mod tests;

use std::fmt;

// Re-exports
pub use board::Board;
pub use lines::{Line, LineId, LineIndex};

/// The two sides of the game.
///
/// Player One opens the game and is the maximising side of the search;
/// scores are always expressed from Player One's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// +1 for Player One, -1 for Player Two
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Stone(Player),
    /// Border sentinel, never playable
    Blocked,
}

impl Cell {
    /// Numeric value used by the pattern tables: 0 empty, +1/-1 stones, 2 blocked.
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Stone(player) => player.sign() as i8,
            Cell::Blocked => 2,
        }
    }

    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Stone(player) => Some(player),
            _ => None,
        }
    }
}

/// Position on the padded grid.
///
/// Interior cells are 1-based: `1..=rows` and `1..=columns`. Row and column 0,
/// as well as `rows + 1` and `columns + 1`, form the blocked border ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Neighbour `steps` cells away along `(dr, dc)`.
    ///
    /// Callers walk from interior cells and stop at the border, so the result
    /// never leaves the padded grid.
    #[inline]
    pub fn shifted(self, dr: i32, dc: i32, steps: i32) -> Pos {
        Pos {
            row: (i32::from(self.row) + dr * steps) as u8,
            col: (i32::from(self.col) + dc * steps) as u8,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four undirected axes a run can lie on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::DiagonalDown,
        Direction::Vertical,
        Direction::DiagonalUp,
    ];

    /// (row delta, column delta)
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}
