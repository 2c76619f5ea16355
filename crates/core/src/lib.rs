//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all of the game rules and session state. It has no
//! dependencies on rendering, terminal input or I/O, which keeps it:
//!
//! - **Deterministic**: a fixed seed deals the same pieces every time
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: any front end can drive it through ticks and actions
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision checks, row completion and compaction
//! - [`pieces`]: the seven-shape catalog and clockwise matrix rotation
//! - [`piece`]: a shape placed on the board
//! - [`rng`]: weighted anti-repeat selection and the lookahead queue
//! - [`game_state`]: phase machine, gravity, actions, locking and line clears
//! - [`snapshot`]: read-only per-frame view for renderers
//! - [`config`]: session settings and their validation
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, GameState};
//! use blockfall_types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(EngineConfig::seeded(12345)).unwrap();
//! game.start();
//!
//! // The first tick spawns a piece.
//! game.tick(0);
//! assert!(game.active().is_some());
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! assert!(game.apply_action(GameAction::HardDrop));
//!
//! assert_eq!(game.phase(), GamePhase::Active);
//! assert_eq!(game.board().locked_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Gravity runs one step per elapsed interval
//! (250ms by default) regardless of frame rate.

pub mod board;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use game_state::{GameState, LockEvent};
pub use piece::Tetromino;
pub use pieces::{get_layout, Layout};
pub use rng::{PieceQueue, PieceSelector};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
