//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] for gameplay
//! and [`MenuKey`] for screen navigation. Nothing here touches engine state.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, menu_key, should_quit, MenuKey};
