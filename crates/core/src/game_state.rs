//! Game state module - manages the complete game session
//!
//! This module ties together the board, the piece queue and the active piece.
//! It owns the phase machine, gravity timing, player actions, locking and line
//! clears.
//!
//! # Timing
//!
//! The engine keeps a single "time since last action" accumulator. `tick(dt)`
//! adds `dt` and runs one gravity step for every full gravity interval the
//! accumulator holds, carrying the remainder, so gravity does not depend on how
//! often the driver calls `tick`. Successful player actions reset the
//! accumulator to zero, which delays the next gravity step.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::{validate_gravity_ms, ConfigError, EngineConfig};
use crate::piece::Tetromino;
use crate::rng::{PieceQueue, PieceSelector};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GamePhase, GravitySpeed};

/// Outcome of the most recent lock, kept until a caller takes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    board: Board,
    active: Option<Tetromino>,
    queue: PieceQueue,
    phase: GamePhase,
    lines: u32,
    gravity_ms: u32,
    since_action_ms: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Number of pieces spawned this episode.
    piece_id: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a session in the `Uninitialized` phase
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = Board::new(config.board_width, config.board_height);
        let queue = Self::build_queue(&config, 0);

        Ok(Self {
            gravity_ms: config.gravity_ms,
            config,
            board,
            active: None,
            queue,
            phase: GamePhase::Uninitialized,
            lines: 0,
            since_action_ms: 0,
            episode_id: 0,
            piece_id: 0,
            last_event: None,
        })
    }

    fn build_queue(config: &EngineConfig, episode_id: u32) -> PieceQueue {
        let selector = match config.seed {
            Some(seed) => PieceSelector::new(seed.wrapping_add(u64::from(episode_id))),
            None => PieceSelector::from_entropy(),
        };
        PieceQueue::new(selector, config.lookahead, config.board_width)
    }

    /// Start the session. The first tick spawns a piece.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Uninitialized {
            return false;
        }
        self.phase = GamePhase::Active;
        // Spawning is due immediately.
        self.since_action_ms = self.gravity_ms;
        info!(
            episode = self.episode_id,
            width = self.board.width(),
            height = self.board.height(),
            gravity_ms = self.gravity_ms,
            "session started"
        );
        true
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn gravity_interval_ms(&self) -> u32 {
        self.gravity_ms
    }

    /// Milliseconds accumulated since the last successful action or gravity step
    pub fn time_since_last_action_ms(&self) -> u32 {
        self.since_action_ms
    }

    /// Change the gravity interval; takes effect on the next tick
    pub fn set_gravity_interval_ms(&mut self, gravity_ms: u32) -> Result<(), ConfigError> {
        validate_gravity_ms(gravity_ms)?;
        debug!(gravity_ms, "gravity interval changed");
        self.gravity_ms = gravity_ms;
        Ok(())
    }

    pub fn set_speed(&mut self, speed: GravitySpeed) {
        // Presets are never zero.
        self.gravity_ms = speed.interval_ms();
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Maximum extra rows the active piece could fall, if there is one
    pub fn ghost_offset(&self) -> Option<u32> {
        self.active.map(|p| p.drop_distance(&self.board))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend(self.board.rows().map(|r| r.to_vec()));
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_offset = self.ghost_offset();
        out.next_queue.clear();
        out.next_queue.extend(self.queue.iter().map(|p| p.kind));
        out.lines = self.lines;
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
        out.gravity_ms = self.gravity_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance time by `elapsed_ms`, running every gravity step that is due.
    ///
    /// Returns true if at least one step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Active {
            return false;
        }

        self.since_action_ms = self.since_action_ms.saturating_add(elapsed_ms);

        let mut stepped = false;
        while self.phase == GamePhase::Active && self.since_action_ms >= self.gravity_ms {
            self.since_action_ms -= self.gravity_ms;
            self.gravity_step();
            stepped = true;
        }
        stepped
    }

    /// One gravity step: spawn when idle, otherwise fall one row or lock
    fn gravity_step(&mut self) {
        let Some(active) = self.active else {
            self.spawn_piece();
            return;
        };

        let fallen = active.translated(0, 1);
        if fallen.is_valid(&self.board) {
            self.active = Some(fallen);
        } else {
            self.lock_piece();
        }
    }

    /// Spawn the next piece from the queue
    fn spawn_piece(&mut self) -> bool {
        if self.board.has_overflow() {
            self.end_game();
            return false;
        }

        let piece = self.queue.pop_next();
        if !piece.is_valid(&self.board) {
            debug!(kind = piece.kind.as_str(), "spawn position blocked");
            self.end_game();
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        true
    }

    /// Lock the active piece onto the board and handle line clears
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock(&active.layout, active.x, active.y);

        let rows = self.board.find_completed_rows();
        let cleared = self.board.compact(&rows) as u32;
        self.lines += cleared;

        let overflow = self.board.has_overflow();
        debug!(
            kind = active.kind.as_str(),
            x = active.x,
            y = active.y,
            cleared,
            lines = self.lines,
            "piece locked"
        );

        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            game_over: overflow,
        });

        if overflow {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.active = None;
        info!(
            episode = self.episode_id,
            lines = self.lines,
            pieces = self.piece_id,
            "game over"
        );
    }

    /// Active piece, if actions may currently move it
    fn controllable(&self) -> Option<Tetromino> {
        match self.phase {
            GamePhase::Active => self.active,
            _ => None,
        }
    }

    fn try_commit(&mut self, candidate: Tetromino) -> bool {
        if !candidate.is_valid(&self.board) {
            return false;
        }
        self.active = Some(candidate);
        self.since_action_ms = 0;
        true
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        match self.controllable() {
            Some(active) => self.try_commit(active.translated(dx, dy)),
            None => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate clockwise in place; fails silently when blocked (no kicks)
    pub fn rotate_clockwise(&mut self) -> bool {
        match self.controllable() {
            Some(active) => self.try_commit(active.rotated_cw()),
            None => false,
        }
    }

    /// Drop the active piece as far as it goes and lock it immediately
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };

        let distance = active.drop_distance(&self.board);
        self.active = Some(active.translated(0, distance as i32));
        self.lock_piece();

        // The next tick spawns without waiting a full interval.
        self.since_action_ms = self.gravity_ms;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Active => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Active,
            GamePhase::Uninitialized | GamePhase::GameOver => return false,
        };
        self.since_action_ms = 0;
        debug!(phase = self.phase.as_str(), "pause toggled");
        true
    }

    /// Throw away the session and start a fresh one with no carryover
    pub fn restart(&mut self) -> bool {
        if self.phase == GamePhase::Paused {
            return false;
        }
        let episode_id = self.episode_id.wrapping_add(1);

        self.board = Board::new(self.config.board_width, self.config.board_height);
        self.queue = Self::build_queue(&self.config, episode_id);
        self.active = None;
        self.lines = 0;
        self.piece_id = 0;
        self.last_event = None;
        self.episode_id = episode_id;
        self.phase = GamePhase::Uninitialized;
        self.start()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate_clockwise(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Tetromino) {
        self.active = Some(piece);
    }
}
