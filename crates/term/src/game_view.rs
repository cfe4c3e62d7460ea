//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Cell, EMPTY};

/// Colors of the material indices; index 0 is the empty background.
pub const PALETTE: [Rgb; 7] = [
    Rgb::new(0, 0, 0),
    Rgb::new(250, 50, 200),
    Rgb::new(120, 220, 240),
    Rgb::new(250, 220, 100),
    Rgb::new(160, 254, 80),
    Rgb::new(200, 200, 200),
    Rgb::new(180, 60, 180),
];

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const GRID_DOT: Rgb = Rgb::new(60, 60, 70);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const TEXT: Rgb = Rgb::new(220, 220, 220);

/// Palette color for a grid value. Indices past the palette wrap over the
/// material colors so larger `num_colors` settings still render distinctly.
pub fn color_of(cell: Cell) -> Rgb {
    if cell == EMPTY {
        return PALETTE[0];
    }
    let materials = PALETTE.len() - 1;
    PALETTE[1 + (cell as usize - 1) % materials]
}

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

/// A lightweight terminal renderer for the game grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let grid_w = (snap.cols as u16) * self.cell_w;
        let grid_h = (snap.rows as u16) * self.cell_h;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let cell = snap.cell(row, col).unwrap_or(EMPTY);
                self.draw_grid_cell(fb, start_x, start_y, row as u16, col as u16, cell);
            }
        }

        if let Some(active) = snap.active.filter(|_| snap.playable()) {
            if active.x >= 0 && active.y >= 0 {
                self.draw_grid_cell(
                    fb,
                    start_x,
                    start_y,
                    active.y as u16,
                    active.x as u16,
                    active.color,
                );
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if !snap.playable() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::plain(BORDER, BACKGROUND);

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

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        cell: Cell,
    ) {
        let (ch, style) = if cell == EMPTY {
            ('·', CellStyle::plain(GRID_DOT, BACKGROUND).dim())
        } else {
            ('█', CellStyle::plain(color_of(cell), BACKGROUND).bold())
        };
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::plain(TEXT, BACKGROUND).bold();
        let value = CellStyle::plain(TEXT, BACKGROUND);

        let mut y = start_y;
        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let mut x = panel_x;
        for &color in snap.next_queue.iter() {
            let swatch = CellStyle::plain(color_of(color), BACKGROUND).bold();
            fb.fill_rect(x, y, self.cell_w, 1, '█', swatch);
            x += self.cell_w + 1;
        }
        y += 2;

        for (name, stat) in [
            ("PIECES", snap.pieces_locked),
            ("CLEARED", snap.shapes_cleared),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, stat, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "←→↓ move", value.dim());
        fb.put_str(panel_x, y + 1, "q quit", value.dim());
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
        let style = CellStyle::plain(Rgb::new(255, 255, 255), BACKGROUND).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
