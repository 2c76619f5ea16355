//! Terminal blockfall runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `blockfall::term`.
//! Gravity is driven by wall-clock time measured between loop iterations.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{info, warn};

use blockfall::core::{EngineConfig, GameSnapshot, GameState};
use blockfall::input::{handle_key_event, menu_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, Screen, Settings, TerminalRenderer, Viewport};
use blockfall::types::{
    GamePhase, GravitySpeed, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_LOOKAHEAD, FRAME_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SpeedArg {
    Slow,
    Normal,
    Fast,
}

impl From<SpeedArg> for GravitySpeed {
    fn from(value: SpeedArg) -> Self {
        match value {
            SpeedArg::Slow => GravitySpeed::Slow,
            SpeedArg::Normal => GravitySpeed::Normal,
            SpeedArg::Fast => GravitySpeed::Fast,
        }
    }
}

/// Falling-block puzzle game for the terminal
#[derive(Debug, Parser)]
#[command(name = "blockfall", version)]
#[command(about = "Falling-block puzzle game for the terminal", long_about = None)]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: usize,

    /// Board height in cells, including the 2 hidden buffer rows
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: usize,

    /// Number of upcoming pieces shown
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD)]
    lookahead: usize,

    /// Initial gravity speed (can be changed from the options screen)
    #[arg(long, value_enum, default_value_t = SpeedArg::Normal)]
    speed: SpeedArg,

    /// Exact gravity interval in milliseconds; overrides --speed
    #[arg(long)]
    gravity_ms: Option<u32>,

    /// Seed for the piece selector (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the ghost piece hidden
    #[arg(long)]
    no_ghost: bool,

    /// Write logs to this file (RUST_LOG controls the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let gravity_ms = self
            .gravity_ms
            .unwrap_or_else(|| GravitySpeed::from(self.speed).interval_ms());
        EngineConfig {
            board_width: self.width,
            board_height: self.height,
            lookahead: self.lookahead,
            gravity_ms,
            seed: self.seed,
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;

    // Logs must never reach stdout/stderr while the alternate screen is up.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn restore_terminal() {
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::cursor::Show,
        crossterm::terminal::LeaveAlternateScreen
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let game = GameState::new(cli.engine_config()).context("invalid game configuration")?;
    let settings = Settings {
        ghost: !cli.no_ghost,
        speed: cli.speed.into(),
    };
    let mut app = App::new(game, settings, cli.gravity_ms.is_some());

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = app.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Front-end state: the current screen plus the engine session
struct App {
    game: GameState,
    screen: Screen,
    settings: Settings,
    /// Gravity fixed from the command line; the speed option is ignored
    fixed_gravity: bool,
    snapshot: GameSnapshot,
}

impl App {
    fn new(game: GameState, settings: Settings, fixed_gravity: bool) -> Self {
        Self {
            game,
            screen: Screen::default(),
            settings,
            fixed_gravity,
            snapshot: GameSnapshot::default(),
        }
    }

    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let mut fb = FrameBuffer::new(0, 0);
        let frame = Duration::from_millis(u64::from(FRAME_MS));
        let mut last_tick = Instant::now();

        loop {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            self.game.snapshot_into(&mut self.snapshot);
            // Fall back to single-column cells when a wide board would not fit.
            let wide = self.snapshot.width.saturating_mul(2).saturating_add(24);
            let cell_w = if wide <= usize::from(w) { 2 } else { 1 };
            GameView::new(cell_w).render_into(
                self.screen,
                &self.settings,
                &self.snapshot,
                Viewport::new(w, h),
                &mut fb,
            );
            term.draw_swap(&mut fb)?;

            if event::poll(frame)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if should_quit(key) {
                            info!(lines = self.game.lines(), "quit requested");
                            return Ok(());
                        }
                        self.handle_key(key);
                    }
                    Event::Resize(_, _) => term.invalidate(),
                    _ => {}
                }
            }

            // Advance by whole milliseconds so the fractional remainder carries over.
            let elapsed_ms = last_tick.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
            last_tick += Duration::from_millis(u64::from(elapsed_ms));

            if self.screen == Screen::Playing {
                self.game.tick(elapsed_ms);
                if self.game.game_over() {
                    self.screen = Screen::GameOver;
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.screen == Screen::Playing {
            if let Some(action) = handle_key_event(key) {
                self.game.apply_action(action);
            }
            return;
        }

        let Some(nav) = menu_key(key) else {
            return;
        };
        let next = self.screen.navigate(nav, &mut self.settings);
        if next == Screen::Playing {
            self.start_session();
        }
        self.screen = next;
    }

    fn start_session(&mut self) {
        if !self.fixed_gravity {
            self.game.set_speed(self.settings.speed);
        }
        let started = match self.game.phase() {
            GamePhase::Uninitialized => self.game.start(),
            _ => self.game.restart(),
        };
        if !started {
            warn!(phase = self.game.phase().as_str(), "session did not start");
        }
    }
}
