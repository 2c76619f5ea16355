//! Pieces module - tetromino catalog and matrix rotation
//!
//! Every shape is a square boolean matrix. I and O use a 4x4 box so that they
//! rotate about a sensible pivot; the other five use 3x3. Rotation is a plain
//! 90° clockwise matrix transform with no wall kicks.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

/// Largest layout side length in the catalog
pub const MAX_LAYOUT_SIZE: usize = 4;

/// Occupied cells of a layout as `(column, row)` offsets from its top-left corner
pub type LayoutCells = ArrayVec<(i32, i32), { MAX_LAYOUT_SIZE * MAX_LAYOUT_SIZE }>;

/// A square boolean matrix describing one rotation of a piece.
///
/// Layouts are `Copy`: every piece instance owns its own value and never
/// aliases the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layout {
    size: usize,
    rows: [[bool; MAX_LAYOUT_SIZE]; MAX_LAYOUT_SIZE],
}

impl Layout {
    /// Build a layout from `size` rows of `size` cells each.
    ///
    /// Returns `None` when the input is not square or is larger than
    /// [`MAX_LAYOUT_SIZE`].
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_LAYOUT_SIZE || rows.iter().any(|r| r.len() != size) {
            return None;
        }
        let mut out = [[false; MAX_LAYOUT_SIZE]; MAX_LAYOUT_SIZE];
        for (i, row) in rows.iter().enumerate() {
            out[i][..size].copy_from_slice(row);
        }
        Some(Self { size, rows: out })
    }

    const fn from_array<const N: usize>(src: [[bool; N]; N]) -> Self {
        let mut rows = [[false; MAX_LAYOUT_SIZE]; MAX_LAYOUT_SIZE];
        let mut i = 0;
        while i < N {
            let mut j = 0;
            while j < N {
                rows[i][j] = src[i][j];
                j += 1;
            }
            i += 1;
        }
        Self { size: N, rows }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at `(row, col)` is occupied; out-of-range cells are empty
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.rows[row][col]
    }

    /// Rows of the matrix, each trimmed to the layout size
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.rows[..self.size].iter().map(move |r| &r[..self.size])
    }

    /// Occupied cells as `(dx, dy)` offsets, row by row
    pub fn cells(&self) -> LayoutCells {
        let mut out = LayoutCells::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.rows[row][col] {
                    out.push((col as i32, row as i32));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise: `rotated[i][j] = self[N-1-j][i]`
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        let mut rows = [[false; MAX_LAYOUT_SIZE]; MAX_LAYOUT_SIZE];
        for (i, row) in rows.iter_mut().enumerate().take(n) {
            for (j, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.rows[n - 1 - j][i];
            }
        }
        Self { size: n, rows }
    }
}

const X: bool = true;
const O: bool = false;

const O_LAYOUT: Layout = Layout::from_array([
    [O, O, O, O],
    [O, X, X, O],
    [O, X, X, O],
    [O, O, O, O],
]);

const I_LAYOUT: Layout = Layout::from_array([
    [O, O, O, O],
    [O, O, O, O],
    [X, X, X, X],
    [O, O, O, O],
]);

const Z_LAYOUT: Layout = Layout::from_array([
    [X, X, O],
    [O, X, X],
    [O, O, O],
]);

const S_LAYOUT: Layout = Layout::from_array([
    [O, X, X],
    [X, X, O],
    [O, O, O],
]);

const L_LAYOUT: Layout = Layout::from_array([
    [X, O, O],
    [X, X, X],
    [O, O, O],
]);

const J_LAYOUT: Layout = Layout::from_array([
    [O, O, X],
    [X, X, X],
    [O, O, O],
]);

const T_LAYOUT: Layout = Layout::from_array([
    [O, X, O],
    [X, X, X],
    [O, O, O],
]);

/// Canonical spawn layout for a piece kind
pub fn get_layout(kind: PieceKind) -> Layout {
    match kind {
        PieceKind::O => O_LAYOUT,
        PieceKind::I => I_LAYOUT,
        PieceKind::Z => Z_LAYOUT,
        PieceKind::S => S_LAYOUT,
        PieceKind::L => L_LAYOUT,
        PieceKind::J => J_LAYOUT,
        PieceKind::T => T_LAYOUT,
    }
}

/// Column a piece with `layout_size` spawns at on a board `board_width` wide
///
/// `floor((board_width - layout_size) / 2)`; negative for boards narrower than
/// the layout.
pub fn spawn_x(board_width: usize, layout_size: usize) -> i32 {
    (board_width as i32 - layout_size as i32).div_euclid(2)
}
