//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no engine logic, so they can be shared by the
//! core engine, the terminal front end and any external renderer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns by default (indexed 0-9)
//! - **Height**: 22 rows by default (indexed 0-21), of which rows 0 and 1 are
//!   hidden buffer rows used for overflow detection
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRAVITY_MS` | 250 | Gravity interval ("Norm" speed) |
//! | `FRAME_MS` | 5 | Front-end frame interval (200 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, GravitySpeed, PieceKind};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//! assert_eq!(PieceKind::from_index(parsed.index()), Some(PieceKind::T));
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(GravitySpeed::Fast.interval_ms(), 100);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells, buffer rows included
pub const DEFAULT_BOARD_HEIGHT: usize = 22;

/// Number of hidden buffer rows at the top of the board
pub const HIDDEN_ROWS: usize = 2;

/// Default number of upcoming pieces kept in the queue
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Default gravity interval in milliseconds
pub const DEFAULT_GRAVITY_MS: u32 = 250;

/// Starting weight of every shape in the selector's fairness table
pub const INITIAL_SELECTOR_WEIGHT: u32 = 5;

/// Number of distinct piece kinds
pub const PIECE_KIND_COUNT: usize = 7;

/// Front-end frame interval in milliseconds (200 FPS)
pub const FRAME_MS: u32 = 5;

/// The seven tetromino piece kinds
///
/// Declaration order is the catalog order: `O, I, Z, S, L, J, T`. The
/// selector's weight table is indexed by [`PieceKind::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    O,
    I,
    Z,
    S,
    L,
    J,
    T,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Catalog index of this kind
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Kind at a catalog index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::T => "t",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Raw input is decoded into these values by the front end before it reaches
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Toggle pause state
    Pause,
    /// Restart the session
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle phase of a game session
///
/// ```text
/// Uninitialized --start--> Active <--toggle_pause--> Paused
///                            |
///                            +--overflow / blocked spawn--> GameOver --restart--> Active
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Uninitialized,
    Active,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Uninitialized => "uninitialized",
            GamePhase::Active => "active",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Named gravity presets offered by the options screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GravitySpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl GravitySpeed {
    pub const ALL: [GravitySpeed; 3] = [GravitySpeed::Slow, GravitySpeed::Normal, GravitySpeed::Fast];

    /// Gravity interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        match self {
            GravitySpeed::Slow => 500,
            GravitySpeed::Normal => DEFAULT_GRAVITY_MS,
            GravitySpeed::Fast => 100,
        }
    }

    /// Short label used by the options screen
    pub fn label(&self) -> &'static str {
        match self {
            GravitySpeed::Slow => "Slow",
            GravitySpeed::Normal => "Norm",
            GravitySpeed::Fast => "Fast",
        }
    }

    /// Next slower preset, saturating at `Slow`
    pub fn slower(&self) -> Self {
        match self {
            GravitySpeed::Slow | GravitySpeed::Normal => GravitySpeed::Slow,
            GravitySpeed::Fast => GravitySpeed::Normal,
        }
    }

    /// Next faster preset, saturating at `Fast`
    pub fn faster(&self) -> Self {
        match self {
            GravitySpeed::Slow => GravitySpeed::Normal,
            GravitySpeed::Normal | GravitySpeed::Fast => GravitySpeed::Fast,
        }
    }
}

/// A cell on the game board: `true` when locked
pub type Cell = bool;
