//! Spiral candidate generation
//!
//! Empty cells are produced by walking clockwise around a bounding box that
//! starts on the reference position and grows by one cell whenever the walk
//! steps past one of its edges (never past the board interior). Cells come
//! out roughly nearest-first without sorting the whole board.

use crate::board::{Board, Cell, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Right,
    Down,
    Left,
    Up,
}

impl Heading {
    #[inline]
    fn delta(self) -> (i32, i32) {
        match self {
            Heading::Right => (0, 1),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Up => (-1, 0),
        }
    }
}

/// Iterator over empty cells spiralling out from a reference position.
///
/// Each empty cell is yielded at most once; border and occupied cells are
/// skipped. Stops once a bounded walk finds nothing new, which only happens
/// after every empty cell has been produced.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    board: &'a Board,
    row: i32,
    col: i32,
    top: i32,
    bottom: i32,
    left: i32,
    right: i32,
    heading: Heading,
    max_steps: usize,
}

impl<'a> Candidates<'a> {
    /// Spiral around `origin`, normally the last move played
    pub fn around(board: &'a Board, origin: Pos) -> Self {
        let row = i32::from(origin.row);
        let col = i32::from(origin.col);
        Self {
            board,
            row,
            col,
            top: row,
            bottom: row,
            left: col,
            right: col,
            heading: Heading::Right,
            max_steps: 4 * (board.rows() + 2) * (board.columns() + 2),
        }
    }

    /// Advance one cell, growing the box and turning at its edges
    fn step(&mut self) {
        let (dr, dc) = self.heading.delta();
        self.row += dr;
        self.col += dc;

        let rows = self.board.rows() as i32;
        let columns = self.board.columns() as i32;

        if self.col > self.right {
            if self.right < columns {
                self.right += 1;
            }
            if self.heading == Heading::Right {
                self.heading = Heading::Down;
            }
        } else if self.col < self.left {
            if self.left > 1 {
                self.left -= 1;
            }
            if self.heading == Heading::Left {
                self.heading = Heading::Up;
            }
        }

        if self.row > self.bottom {
            if self.bottom < rows {
                self.bottom += 1;
            }
            if self.heading == Heading::Down {
                self.heading = Heading::Left;
            }
        } else if self.row < self.top {
            if self.top > 1 {
                self.top -= 1;
            }
            if self.heading == Heading::Up {
                self.heading = Heading::Right;
            }
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        for _ in 0..self.max_steps {
            self.step();
            // The walk overshoots the box by at most one cell, i.e. onto the border
            if self.board.get_at(self.row, self.col) == Cell::Empty {
                return Some(Pos::new(self.row as u8, self.col as u8));
            }
        }
        None
    }
}
