//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, input mapping and terminal front end so callers can
//! depend on a single package while the implementation lives in `crates/`.
//!
//! ```
//! use blockfall::core::{EngineConfig, GameState};
//!
//! let mut game = GameState::new(EngineConfig::seeded(1)).unwrap();
//! game.start();
//! game.tick(0);
//! assert!(game.active().is_some());
//! ```

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
