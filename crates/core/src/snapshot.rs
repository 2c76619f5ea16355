//! Read-only view of a game session for renderers

use serde::{Deserialize, Serialize};

use crate::piece::Tetromino;
use crate::pieces::Layout;
use crate::types::{GamePhase, PieceKind, HIDDEN_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub layout: Layout,
    pub x: i32,
    pub y: i32,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            layout: value.layout,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute board coordinates of the occupied cells, shifted down by `dy`
    pub fn cells_offset(&self, dy: u32) -> impl Iterator<Item = (i32, i32)> {
        let (x, y) = (self.x, self.y + dy as i32);
        self.layout
            .cells()
            .into_iter()
            .map(move |(dx, ry)| (x + dx, y + ry))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Locked cells, `board[y][x]`, buffer rows included
    pub board: Vec<Vec<bool>>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_offset: Option<u32>,
    /// Upcoming pieces, next first
    pub next_queue: Vec<PieceKind>,
    pub lines: u32,
    pub phase: GamePhase,
    pub episode_id: u32,
    pub piece_id: u32,
    pub gravity_ms: u32,
}

impl GameSnapshot {
    /// Rows a player can see (buffer rows skipped)
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &[bool])> + '_ {
        self.board
            .iter()
            .enumerate()
            .skip(HIDDEN_ROWS)
            .map(|(y, row)| (y, row.as_slice()))
    }
}
