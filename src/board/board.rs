//! Grid with a blocked sentinel border

use super::{Cell, Direction, Player, Pos};

/// Game board of `rows x columns` playable cells surrounded by one ring of
/// [`Cell::Blocked`] sentinels.
///
/// The border lets win checks and line scans run until they hit a non-matching
/// cell without separate bounds checks. Border cells never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(rows: usize, columns: usize) -> Self {
        let width = columns + 2;
        let height = rows + 2;
        let mut cells = vec![Cell::Empty; width * height];
        for r in 0..height {
            for c in 0..width {
                if r == 0 || c == 0 || r == height - 1 || c == width - 1 {
                    cells[r * width + c] = Cell::Blocked;
                }
            }
        }
        Self {
            rows,
            columns,
            cells,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of playable cells
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        usize::from(pos.row) * (self.columns + 2) + usize::from(pos.col)
    }

    /// Get cell at a position of the padded grid
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Get cell at signed coordinates, treating anything off the padded grid as blocked
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Cell {
        if row < 0 || col < 0 || row > self.rows as i32 + 1 || col > self.columns as i32 + 1 {
            return Cell::Blocked;
        }
        self.get(Pos::new(row as u8, col as u8))
    }

    /// Check if position is an empty playable cell
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.get(pos) == Cell::Empty
    }

    /// Check if position lies inside the playable area
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 1
            && pos.col >= 1
            && usize::from(pos.row) <= self.rows
            && usize::from(pos.col) <= self.columns
    }

    /// Place a stone. The caller guarantees `pos` is an empty interior cell;
    /// use [`crate::rules::apply_move`] for unchecked input.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.is_empty(pos), "placing on a non-empty cell {pos}");
        let idx = self.index(pos);
        self.cells[idx] = Cell::Stone(player);
    }

    /// Copy of this board with one more stone on it
    #[must_use]
    pub fn with_stone(&self, pos: Pos, player: Player) -> Board {
        let mut next = self.clone();
        next.place_stone(pos, player);
        next
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Stone(_)))
            .count()
    }

    /// Check if board has no stones
    pub fn is_board_empty(&self) -> bool {
        self.stone_count() == 0
    }

    /// Centre cell (rounded towards the top-left on even sizes)
    pub fn center(&self) -> Pos {
        Pos::new(
            ((self.rows + 1) / 2) as u8,
            ((self.columns + 1) / 2) as u8,
        )
    }

    /// Iterate over the playable positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (1..=self.rows).flat_map(move |r| (1..=self.columns).map(move |c| Pos::new(r as u8, c as u8)))
    }

    /// Cells of the full line through `start` along `direction`.
    ///
    /// The sequence begins one step before `start` and continues until it
    /// leaves the padded grid, so for a canonical line start both ends are
    /// border cells.
    pub fn cells_along(&self, start: Pos, direction: Direction) -> Vec<Cell> {
        let (dr, dc) = direction.delta();
        let mut r = i32::from(start.row) - dr;
        let mut c = i32::from(start.col) - dc;
        let mut cells = Vec::with_capacity(self.rows.max(self.columns) + 2);
        while r >= 0 && c >= 0 && r <= self.rows as i32 + 1 && c <= self.columns as i32 + 1 {
            cells.push(self.get(Pos::new(r as u8, c as u8)));
            r += dr;
            c += dc;
        }
        cells
    }
}
