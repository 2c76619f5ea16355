//! GameView: maps engine snapshots and front-end screens into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_layout, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::screen::{OptionItem, Screen, Settings, MENU_ITEMS, OPTION_ITEMS};
use crate::types::{GamePhase, GravitySpeed, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const HINT: CellStyle = CellStyle::fg(Rgb::new(150, 150, 150)).dim();
const SELECTED: CellStyle = CellStyle::fg(Rgb::new(240, 220, 80)).bold();

/// Renders every front-end screen.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render `screen` into `fb`, resizing it to the viewport.
    pub fn render_into(
        &self,
        screen: Screen,
        settings: &Settings,
        snap: &GameSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        match screen {
            Screen::Menu { selected } => self.draw_menu(fb, selected),
            Screen::Options { selected } => self.draw_options(fb, selected, settings),
            Screen::About => self.draw_about(fb),
            Screen::Playing => self.draw_game(fb, snap, settings.ghost),
            Screen::GameOver => self.draw_game_over(fb, snap),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        screen: Screen,
        settings: &Settings,
        snap: &GameSnapshot,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, settings, snap, viewport, &mut fb);
        fb
    }

    fn top(fb: &FrameBuffer, content_h: u16) -> u16 {
        fb.height().saturating_sub(content_h) / 2
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, selected: usize) {
        let y = Self::top(fb, MENU_ITEMS.len() as u16 + 4);
        fb.put_centered(y, "BLOCKFALL", LABEL);
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            let row = y + 2 + i as u16;
            if i == selected {
                fb.put_centered(row, &format!("> {} <", item.label()), SELECTED);
            } else {
                fb.put_centered(row, item.label(), VALUE);
            }
        }
        fb.put_centered(y + 3 + MENU_ITEMS.len() as u16, "arrows + enter", HINT);
    }

    fn draw_options(&self, fb: &mut FrameBuffer, selected: usize, settings: &Settings) {
        let y = Self::top(fb, OPTION_ITEMS.len() as u16 + 4);
        fb.put_centered(y, "OPTIONS", LABEL);
        for (i, item) in OPTION_ITEMS.iter().enumerate() {
            let value = match item {
                OptionItem::Ghost => choice_row(&["On", "Off"], usize::from(!settings.ghost)),
                OptionItem::Speed => {
                    let labels = GravitySpeed::ALL.map(|s| s.label());
                    let current = GravitySpeed::ALL
                        .iter()
                        .position(|&s| s == settings.speed)
                        .unwrap_or(0);
                    choice_row(&labels, current)
                }
            };
            let style = if i == selected { SELECTED } else { VALUE };
            fb.put_centered(y + 2 + i as u16, &format!("{:<6} {}", item.label(), value), style);
        }
        fb.put_centered(
            y + 3 + OPTION_ITEMS.len() as u16,
            "> press enter to get back to menu",
            HINT,
        );
    }

    fn draw_about(&self, fb: &mut FrameBuffer) {
        let y = Self::top(fb, 5);
        fb.put_centered(y, "BLOCKFALL", LABEL);
        fb.put_centered(y + 2, concat!("version ", env!("CARGO_PKG_VERSION")), VALUE);
        fb.put_centered(y + 4, "> press enter to get back to menu", HINT);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let y = Self::top(fb, 5);
        fb.put_centered(y, "GAME OVER", CellStyle::fg(Rgb::new(255, 255, 255)).bold());
        fb.put_centered(y + 2, &format!("lines cleared: {}", snap.lines), VALUE);
        fb.put_centered(y + 4, "PLAY AGAIN? press enter", CellStyle::fg(Rgb::new(200, 60, 60)));
    }

    fn draw_game(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ghost: bool) {
        let visible_rows = snap.visible_rows().count();
        let visible = u16::try_from(visible_rows).unwrap_or(u16::MAX);
        let board_px_w = u16::try_from(snap.width)
            .unwrap_or(u16::MAX)
            .saturating_mul(self.cell_w);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = visible.saturating_add(2);

        let start_x = fb.width().saturating_sub(frame_w.saturating_add(PANEL_W)) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Boards larger than the viewport are clipped.
        let hidden = snap.height.saturating_sub(visible_rows) as i64;
        let (fb_w, fb_h) = (i64::from(fb.width()), i64::from(fb.height()));
        let to_screen = |x: i32, y: i32| -> Option<(u16, u16)> {
            let (x, vy) = (i64::from(x), i64::from(y) - hidden);
            if x < 0 || x >= snap.width as i64 || vy < 0 || vy >= visible_rows as i64 {
                return None;
            }
            let px = i64::from(start_x) + 1 + x * i64::from(self.cell_w);
            let py = i64::from(start_y) + 1 + vy;
            if px >= fb_w || py >= fb_h {
                return None;
            }
            Some((px as u16, py as u16))
        };

        let empty = CellStyle::fg(Rgb::new(90, 90, 100)).on(PLAY_BG).dim();
        let locked = CellStyle::fg(Rgb::new(170, 170, 180)).on(PLAY_BG);
        for (y, row) in snap.visible_rows() {
            for (x, &cell) in row.iter().enumerate() {
                if let Some((px, py)) = to_screen(x as i32, y as i32) {
                    let (ch, style) = if cell { ('█', locked) } else { ('·', empty) };
                    fb.fill_rect(px, py, self.cell_w, 1, ch, style);
                }
            }
        }

        if let Some(active) = snap.active {
            if ghost {
                if let Some(offset) = snap.ghost_offset.filter(|&d| d > 0) {
                    let style = CellStyle::fg(Rgb::new(140, 140, 140)).on(PLAY_BG).dim();
                    for (x, y) in active.cells_offset(offset) {
                        if let Some((px, py)) = to_screen(x, y) {
                            fb.fill_rect(px, py, self.cell_w, 1, '░', style);
                        }
                    }
                }
            }

            let style = CellStyle::fg(piece_color(active.kind)).on(PLAY_BG).bold();
            for (x, y) in active.cells_offset(0) {
                if let Some((px, py)) = to_screen(x, y) {
                    fb.fill_rect(px, py, self.cell_w, 1, '█', style);
                }
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, panel_x, start_y);

        if snap.phase == GamePhase::Paused {
            let mid = start_y.saturating_add(frame_h / 2);
            let x = start_x.saturating_add(frame_w.saturating_sub(6) / 2);
            fb.put_str(x, mid, "PAUSED", CellStyle::fg(Rgb::new(255, 255, 255)).bold());
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        if x >= fb.width() {
            return;
        }

        let mut y = top;
        fb.put_str(x, y, "NEXT", LABEL);
        y = y.saturating_add(1);
        for &kind in &snap.next_queue {
            if y >= fb.height() {
                return;
            }
            y = y.saturating_add(self.draw_preview(fb, kind, x, y) + 1);
        }

        y = y.saturating_add(1);
        fb.put_str(x, y, &format!("lines cleared: {}", snap.lines), VALUE);
    }

    /// Draw the occupied rows of `kind`'s spawn layout; returns rows used.
    fn draw_preview(&self, fb: &mut FrameBuffer, kind: PieceKind, x: u16, y: u16) -> u16 {
        let layout = get_layout(kind);
        let cells = layout.cells();
        let Some(min_row) = cells.iter().map(|&(_, r)| r).min() else {
            return 0;
        };
        let max_row = cells.iter().map(|&(_, r)| r).max().unwrap_or(min_row);

        let style = CellStyle::fg(piece_color(kind));
        for &(cx, cy) in cells.iter() {
            let px = x.saturating_add(cx as u16 * self.cell_w);
            let py = y.saturating_add((cy - min_row) as u16);
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
        (max_row - min_row + 1) as u16
    }
}

/// Columns reserved to the right of the board for the side panel.
const PANEL_W: u16 = 20;

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::fg(Rgb::new(200, 200, 200));
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn choice_row(labels: &[&str], current: usize) -> String {
    labels
        .iter()
        .enumerate()
        .map(|(i, l)| {
            if i == current {
                format!("[{l}]")
            } else {
                format!(" {l} ")
            }
        })
        .collect()
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
