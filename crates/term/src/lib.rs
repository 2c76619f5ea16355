//! Terminal front end for the blockfall engine.
//!
//! Screens render into a simple framebuffer that is diffed and flushed to the
//! terminal with crossterm. Board cells are 2 columns wide to compensate for
//! the usual glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{MenuItem, OptionItem, Screen, Settings};
