//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (cell_w = 2):
//!
//! ```text
//! ┌────────────────┐  SCORE
//! │················│  1200
//! │██··············│  LINES
//! └────────────────┘  6
//!  1        >2        3
//!  ██       ██████    ██
//!  ██         ██      ██
//! ```

use crate::core::{get_shape, shape_cells, ClearEvent, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockKind, BOARD_SIZE, QUEUE_LEN};

/// Rows reserved under the board for the queue (label + tallest shape).
const QUEUE_ROWS: u16 = 6;

/// Columns reserved per queue slot, in board cells.
const QUEUE_SLOT_CELLS: u16 = 5;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

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

/// Presentation-only state layered over the snapshot.
///
/// The engine knows nothing about the cursor or about how long a clear has
/// been on screen; the terminal loop owns both and passes them in here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    /// Anchor cell `(row, col)` under the cursor.
    pub cursor: Option<(u8, u8)>,
    /// Cells to highlight from the most recent clear.
    pub flash: Option<&'a ClearEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the puzzle.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Width and height of the board frame including its border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_SIZE as u16 * self.cell_w + 2,
            BOARD_SIZE as u16 + 2,
        )
    }

    /// Top-left corner of the board frame for a viewport.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + QUEUE_ROWS) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render into a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, overlay: Overlay<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only pay for a
    /// resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: Overlay<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Placed cells.
        for row in 0..BOARD_SIZE as u16 {
            for col in 0..BOARD_SIZE as u16 {
                match snap.cell(row as usize, col as usize) {
                    Some(kind) => {
                        let style = CellStyle::fg(block_color(kind)).on(BOARD_BG);
                        self.fill_board_cell(fb, start_x, start_y, row, col, '█', style);
                    }
                    None => {
                        let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(BOARD_BG).dim();
                        self.fill_board_cell(fb, start_x, start_y, row, col, '·', style);
                    }
                }
            }
        }

        // Placement preview or bare cursor.
        if let Some((row, col)) = overlay
            .cursor
            .filter(|&(r, c)| r < BOARD_SIZE && c < BOARD_SIZE)
        {
            match snap.selected_kind() {
                Some(kind) => self.draw_preview(fb, snap, kind, start_x, start_y, row, col),
                None => {
                    let style = CellStyle::fg(Rgb::new(255, 255, 255)).on(Rgb::new(70, 70, 90)).bold();
                    self.fill_board_cell(fb, start_x, start_y, row as u16, col as u16, '▫', style);
                }
            }
        }

        // Cleared cells, drawn last so they stay visible over the preview.
        if let Some(event) = overlay.flash {
            let style = CellStyle::fg(Rgb::new(255, 255, 255)).on(Rgb::new(120, 120, 140)).bold();
            for &(row, col) in &event.cells {
                self.fill_board_cell(fb, start_x, start_y, row as u16, col as u16, '░', style);
            }
        }

        self.draw_queue(fb, snap, start_x, start_y.saturating_add(frame_h));
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

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

    #[allow(clippy::too_many_arguments)]
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        kind: BlockKind,
        start_x: u16,
        start_y: u16,
        row: u8,
        col: u8,
    ) {
        let shape = get_shape(kind);
        let n = BOARD_SIZE as usize;
        let fits = shape_cells(shape).all(|(dr, dc)| {
            let (r, c) = (row as usize + dr, col as usize + dc);
            r < n && c < n && snap.board[r][c] == 0
        });
        let fg = if fits {
            block_color(kind)
        } else {
            Rgb::new(220, 60, 60)
        };
        let style = CellStyle::fg(fg).on(BOARD_BG);

        for (dr, dc) in shape_cells(shape) {
            let (r, c) = (row as usize + dr, col as usize + dc);
            if r < n && c < n {
                self.fill_board_cell(fb, start_x, start_y, r as u16, c as u16, '▒', style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_queue(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, top: u16) {
        let label = CellStyle::fg(Rgb::new(200, 200, 200));
        let active = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let slot_w = QUEUE_SLOT_CELLS * self.cell_w;

        for (slot, &kind) in snap.queue.iter().enumerate().take(QUEUE_LEN) {
            let x = start_x.saturating_add(1 + slot as u16 * slot_w);
            let selected = snap.selected == Some(slot as u8);
            let text = if selected {
                format!(">{}", slot + 1)
            } else {
                format!(" {}", slot + 1)
            };
            fb.put_str(x, top, &text, if selected { active } else { label });

            let mut style = CellStyle::fg(block_color(kind));
            if snap.selected.is_some() && !selected {
                style = style.dim();
            }
            for (dr, dc) in shape_cells(get_shape(kind)) {
                let px = x.saturating_add(1 + dc as u16 * self.cell_w);
                let py = top.saturating_add(1 + dr as u16);
                fb.fill_rect(px, py, self.cell_w, 1, '█', style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.score.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.lines.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PLACED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.placements.to_string(), value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Display color of a block kind.
pub fn block_color(kind: BlockKind) -> Rgb {
    match kind {
        BlockKind::Square => Rgb::new(240, 220, 80),
        BlockKind::LineFour => Rgb::new(80, 220, 220),
        BlockKind::LineThree => Rgb::new(60, 170, 160),
        BlockKind::LRight => Rgb::new(255, 165, 0),
        BlockKind::LLeft => Rgb::new(80, 120, 220),
        BlockKind::Zig => Rgb::new(220, 80, 80),
        BlockKind::Tee => Rgb::new(200, 120, 220),
        BlockKind::Column => Rgb::new(100, 220, 120),
    }
}
