//! Piece instances - one catalog shape placed on the board

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::pieces::{get_layout, spawn_x, Layout};
use crate::types::PieceKind;

/// A piece placed on the board.
///
/// `x`/`y` are the top-left corner of the layout's bounding box in board
/// coordinates. Either may be negative: only occupied cells are bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub layout: Layout,
    pub x: i32,
    pub y: i32,
}

impl Tetromino {
    /// Create a piece at the spawn position for a board `board_width` wide
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let layout = get_layout(kind);
        Self {
            kind,
            layout,
            x: spawn_x(board_width, layout.size()),
            y: 0,
        }
    }

    /// Same piece shifted by `(dx, dy)`
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its layout rotated clockwise in place
    pub fn rotated_cw(&self) -> Self {
        Self {
            layout: self.layout.rotated_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, y) = (self.x, self.y);
        self.layout
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Check if the piece fits on the board at its current position
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_placement(&self.layout, self.x, self.y)
    }

    /// Largest `c >= 0` such that the piece shifted down by `c` still fits
    pub fn drop_distance(&self, board: &Board) -> u32 {
        let mut distance = 0;
        while board.is_valid_placement(&self.layout, self.x, self.y + distance as i32 + 1) {
            distance += 1;
        }
        distance
    }
}
