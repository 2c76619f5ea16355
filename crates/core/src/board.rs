//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of locked/empty cells stored as a flat,
//! row-major vector. Row 0 is the top. Rows `0..HIDDEN_ROWS` are buffer rows
//! above the visible playfield: they never clear, and any locked cell in them
//! means the stack has overflowed.

use crate::pieces::Layout;
use crate::types::{Cell, HIDDEN_ROWS};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
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

    /// Check if position is occupied (within bounds and locked)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(true)
    }

    /// Check whether a single cell may hold part of a piece.
    ///
    /// Columns must be in `[0, width)` and rows below `height`. Rows above the
    /// top (`y < 0`) are open space.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        if x < 0 || x as usize >= self.width || y >= self.height as i32 {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Check if `layout` placed with its top-left corner at `(x, y)` fits
    pub fn is_valid_placement(&self, layout: &Layout, x: i32, y: i32) -> bool {
        layout
            .cells()
            .iter()
            .all(|&(dx, dy)| self.is_open(x + dx, y + dy))
    }

    /// Lock every occupied cell of `layout` at `(x, y)` onto the board.
    ///
    /// Cells above the top row have nowhere to go and are dropped. Returns the
    /// number of cells written.
    pub fn lock(&mut self, layout: &Layout, x: i32, y: i32) -> usize {
        let mut written = 0;
        for &(dx, dy) in layout.cells().iter() {
            if self.set(x + dx, y + dy, true) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width].iter().all(|&c| c)
    }

    /// Full rows below the buffer rows, top to bottom
    pub fn find_completed_rows(&self) -> Vec<usize> {
        (HIDDEN_ROWS..self.height)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove `rows` and insert as many empty rows at the top.
    ///
    /// Uses a two-pointer sweep from the bottom so surviving rows keep their
    /// relative order. Out-of-range and duplicate indices are ignored. Returns
    /// the number of rows removed.
    pub fn compact(&mut self, rows: &[usize]) -> usize {
        let width = self.width;
        let mut write_y = self.height;
        let mut removed = 0;

        for read_y in (0..self.height).rev() {
            if rows.contains(&read_y) {
                removed += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = false;
        }

        removed
    }

    /// Find and compact full rows in one call; returns the rows removed
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let rows = self.find_completed_rows();
        self.compact(&rows);
        rows
    }

    /// Check whether any buffer-row cell is locked (game over condition)
    pub fn has_overflow(&self) -> bool {
        let end = HIDDEN_ROWS.min(self.height) * self.width;
        self.cells[..end].iter().any(|&c| c)
    }

    /// Number of locked cells on the whole board
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Fill row `y` completely, leaving the listed columns empty
    pub fn fill_row_except(&mut self, y: usize, gaps: &[usize]) {
        for x in 0..self.width {
            self.set(x as i32, y as i32, !gaps.contains(&x));
        }
    }
}
