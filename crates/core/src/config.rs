//! Session configuration and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    GravitySpeed, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_GRAVITY_MS, DEFAULT_LOOKAHEAD,
    HIDDEN_ROWS,
};

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width must be at least 1 cell (got {0})")]
    ZeroWidth(usize),

    #[error(
        "board height must leave at least one visible row below the {hidden} buffer rows (got {height})"
    )]
    HeightTooSmall { height: usize, hidden: usize },

    #[error("lookahead depth must be at least 1 (got {0})")]
    ZeroLookahead(usize),

    #[error("gravity interval must be at least 1ms (got {0})")]
    ZeroGravityInterval(u32),
}

/// Host-supplied settings for one game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_width: usize,
    /// Total rows, buffer rows included
    pub board_height: usize,
    pub lookahead: usize,
    pub gravity_ms: u32,
    /// Fixed selector seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            lookahead: DEFAULT_LOOKAHEAD,
            gravity_ms: DEFAULT_GRAVITY_MS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Default configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_board(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_gravity_ms(mut self, gravity_ms: u32) -> Self {
        self.gravity_ms = gravity_ms;
        self
    }

    pub fn with_speed(self, speed: GravitySpeed) -> Self {
        self.with_gravity_ms(speed.interval_ms())
    }

    /// Check every field, reporting the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width == 0 {
            return Err(ConfigError::ZeroWidth(self.board_width));
        }
        if self.board_height <= HIDDEN_ROWS {
            return Err(ConfigError::HeightTooSmall {
                height: self.board_height,
                hidden: HIDDEN_ROWS,
            });
        }
        if self.lookahead == 0 {
            return Err(ConfigError::ZeroLookahead(self.lookahead));
        }
        validate_gravity_ms(self.gravity_ms)
    }
}

pub(crate) fn validate_gravity_ms(gravity_ms: u32) -> Result<(), ConfigError> {
    if gravity_ms == 0 {
        return Err(ConfigError::ZeroGravityInterval(gravity_ms));
    }
    Ok(())
}
