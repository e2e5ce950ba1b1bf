//! Scoring lines: every row, every column, and every diagonal long enough to
//! hold a winning run.
//!
//! Ids are dense and stable for a given grid and win length:
//!
//! | ids | lines |
//! |---|---|
//! | `0..rows` | rows, top to bottom |
//! | `rows..rows + columns` | columns, left to right |
//! | next `rows + columns - 2w + 1` | `↘` diagonals: starts on column 1 (top to bottom), then on row 1 |
//! | last `rows + columns - 2w + 1` | `↗` diagonals: starts on column 1 (bottom to top), then on the last row |
//!
//! The id doubles as the slot index of the [`crate::eval::ScoreCache`].

use super::{Direction, Pos};

/// Stable identity of a scoring line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub usize);

impl LineId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A scoring line, described by its first interior cell and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub start: Pos,
    pub direction: Direction,
}

/// Maps board positions to the lines passing through them.
#[derive(Debug, Clone)]
pub struct LineIndex {
    rows: usize,
    columns: usize,
    win_count: usize,
    lines: Vec<Line>,
}

impl LineIndex {
    pub fn new(rows: usize, columns: usize, win_count: usize) -> Self {
        let mut index = Self {
            rows,
            columns,
            win_count,
            lines: Vec::new(),
        };

        let mut starts: Vec<(Pos, Direction)> = Vec::new();
        for r in 1..=rows {
            starts.push((Pos::new(r as u8, 1), Direction::Horizontal));
        }
        for c in 1..=columns {
            starts.push((Pos::new(1, c as u8), Direction::Vertical));
        }
        for r in 1..=index.left_diagonal_starts() {
            starts.push((Pos::new(r as u8, 1), Direction::DiagonalDown));
        }
        for c in 2..=index.edge_diagonal_starts() + 1 {
            starts.push((Pos::new(1, c as u8), Direction::DiagonalDown));
        }
        for k in 0..index.left_diagonal_starts() {
            starts.push((Pos::new((rows - k) as u8, 1), Direction::DiagonalUp));
        }
        for c in 2..=index.edge_diagonal_starts() + 1 {
            starts.push((Pos::new(rows as u8, c as u8), Direction::DiagonalUp));
        }

        index.lines = starts
            .into_iter()
            .enumerate()
            .map(|(id, (start, direction))| Line {
                id: LineId(id),
                start,
                direction,
            })
            .collect();
        index
    }

    /// Diagonals of one family that start on column 1
    #[inline]
    fn left_diagonal_starts(&self) -> usize {
        if self.columns < self.win_count {
            return 0;
        }
        (self.rows + 1).saturating_sub(self.win_count)
    }

    /// Diagonals of one family that start on the top (or bottom) row, excluding column 1
    #[inline]
    fn edge_diagonal_starts(&self) -> usize {
        if self.rows < self.win_count {
            return 0;
        }
        self.columns.saturating_sub(self.win_count)
    }

    #[inline]
    fn diagonals_per_family(&self) -> usize {
        self.left_diagonal_starts() + self.edge_diagonal_starts()
    }

    /// Total number of lines (and score cache slots)
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn win_count(&self) -> usize {
        self.win_count
    }

    /// All lines in id order
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[inline]
    pub fn get(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    /// Ids of the lines through one position: its row, its column and zero to
    /// two diagonals (diagonals shorter than the win length are not lines).
    pub fn lines_through(&self, pos: Pos) -> impl Iterator<Item = LineId> {
        let r = usize::from(pos.row);
        let c = usize::from(pos.col);
        let rows = self.rows;
        let down_base = self.rows + self.columns;
        let up_base = down_base + self.diagonals_per_family();
        let left = self.left_diagonal_starts();
        let edge = self.edge_diagonal_starts();

        // ↘: walk back to the top-left end
        let back = r.min(c) - 1;
        let (sr, sc) = (r - back, c - back);
        let down = if sc == 1 {
            (sr <= left).then(|| down_base + sr - 1)
        } else {
            (sc - 1 <= edge).then(|| down_base + left + sc - 2)
        };

        // ↗: walk back to the bottom-left end
        let back = (rows - r).min(c - 1);
        let (sr, sc) = (r + back, c - back);
        let up = if sc == 1 {
            (rows - sr < left).then(|| up_base + rows - sr)
        } else {
            (sc - 1 <= edge).then(|| up_base + left + sc - 2)
        };

        [
            Some(r - 1),
            Some(self.rows + c - 1),
            down,
            up,
        ]
        .into_iter()
        .flatten()
        .map(LineId)
    }

    /// Distinct lines passing through at least one of `positions`, in first-seen order.
    pub fn get_indices(&self, positions: &[Pos]) -> Vec<&Line> {
        let mut ids: Vec<LineId> = Vec::with_capacity(positions.len() * 4);
        for &pos in positions {
            for id in self.lines_through(pos) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids.into_iter().map(|id| self.get(id)).collect()
    }
}
