//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of [`Cell`]s stored as a flat,
//! row-major vector. Coordinates are `(x, y)` with x growing rightwards and y
//! growing downwards from the top-left corner. Anything outside the grid is
//! treated as occupied, so walls and the floor need no special casing.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, Move, BOARD_HEIGHT, BOARD_WIDTH, MASK_SIZE};

/// Rows completed by a single bake, ascending. A piece spans at most 4 rows.
pub type CompletedLines = ArrayVec<usize, MASK_SIZE>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Zero dimensions are allowed.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Build a board from rows, for fixtures. Short rows are padded with empty cells.
    pub fn from_rows(width: usize, rows: &[Vec<Cell>]) -> Self {
        let mut board = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().take(width).enumerate() {
                board.cells[y * width + x] = cell;
            }
        }
        board
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.is_in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// True for filled cells and for anything outside the grid.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => self.cells[idx].is_occupied(),
            None => true,
        }
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled. An empty-width row is never full.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height || self.width == 0 {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_occupied())
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Whether `piece` could take `mv` without leaving the grid or overlapping
    /// a filled cell.
    ///
    /// The check runs on a clone; neither the piece nor the board is touched.
    pub fn is_valid_move(&self, piece: &Piece, mv: Move) -> bool {
        let mut probe = piece.clone();
        probe.apply(mv);
        self.fits(&probe)
    }

    /// Whether every occupied cell of `piece` is in bounds and empty.
    pub fn fits(&self, piece: &Piece) -> bool {
        piece.cells().all(|(x, y)| !self.is_occupied(x, y))
    }

    /// Merge `piece` into the grid and report the rows it completed.
    ///
    /// No validation: the caller has established that the piece cannot move
    /// down. Cells that fall outside the grid are dropped. Only rows in
    /// `[piece.y, piece.y + size)` are checked.
    pub fn bake_piece(&mut self, piece: &Piece) -> CompletedLines {
        let color_cells = piece
            .compute_occupancy()
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(move |(col, &cell)| (col as i32, row as i32, cell))
            });
        for (dx, dy, cell) in color_cells {
            if cell.is_occupied() {
                self.set(piece.x() + dx, piece.y() + dy, cell);
            }
        }

        let mut completed = CompletedLines::new();
        let top = piece.y();
        for y in top..top + piece.size() as i32 {
            if y >= 0 && self.is_row_full(y as usize) {
                completed.push(y as usize);
            }
        }
        completed
    }

    /// Delete the given rows and insert the same number of empty rows on top.
    ///
    /// Rows are compacted bottom-up in one pass (two-pointer), which is the
    /// same as removing every listed row at once. Duplicates and out-of-range
    /// indices are ignored. Returns the number of rows removed.
    pub fn clear_lines(&mut self, lines: &[usize]) -> usize {
        let width = self.width;
        let mut write_y = self.height;

        for read_y in (0..self.height).rev() {
            if lines.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        // write_y rows were removed; blank the top.
        self.cells[..write_y * width].fill(Cell::Empty);
        write_y
    }

    /// Grow or shrink the grid, keeping every cell whose coordinates survive.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.width && height == self.height {
            return;
        }
        let mut cells = vec![Cell::Empty; width * height];
        let keep_w = width.min(self.width);
        for y in 0..height.min(self.height) {
            let src = y * self.width;
            let dst = y * width;
            cells[dst..dst + keep_w].copy_from_slice(&self.cells[src..src + keep_w]);
        }
        self.width = width;
        self.height = height;
        self.cells = cells;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
