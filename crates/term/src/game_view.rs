//! GameView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). The board itself is painted through the
//! engine's [`CellSink`] interface, so the view sees exactly the cell calls any
//! other drawing backend would.

use crate::core::{CellSink, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Color;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Color = Color::new(30, 30, 40);
const BLACK: Color = Color::new(0, 0, 0);

const CONTROLS: [(&str, &str); 5] = [
    ("←/→", "move"),
    ("↓", "drop"),
    ("SPACE", "rotate"),
    ("R", "restart"),
    ("Q", "quit"),
];

/// Terminal layout for the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = (snap.cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Color::new(200, 200, 200), BLACK);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        snap.draw(&mut BoardPainter {
            view: self,
            fb: &mut *fb,
            origin_x: start_x + 1,
            origin_y: start_y + 1,
        });

        self.draw_side_panel(fb, viewport, start_x.saturating_add(frame_w + 2), start_y);

        if snap.game_over {
            draw_centered(fb, start_x, start_y + frame_h / 2, frame_w, "GAME OVER");
            draw_centered(fb, start_x, start_y + frame_h / 2 + 1, frame_w, "R to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, viewport: Viewport, x: u16, y: u16) {
        if x.saturating_add(14) > viewport.width {
            return;
        }

        let label = CellStyle::new(Color::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::new(Color::new(200, 200, 200), BLACK);

        fb.put_str(x, y, "CONTROLS", label);
        for (i, (key, action)) in CONTROLS.iter().enumerate() {
            let row = y.saturating_add(2 + i as u16);
            fb.put_str(x, row, key, value);
            fb.put_str(x + 7, row, action, value.dim());
        }
    }
}

/// Paints grid cells handed out by [`GameSnapshot::draw`].
struct BoardPainter<'a> {
    view: &'a GameView,
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
}

impl CellSink for BoardPainter<'_> {
    fn draw_cell(&mut self, row: usize, col: usize, color: Option<Color>) {
        let cell = match color {
            Some(fg) => Cell::new('█', CellStyle::new(fg, PLAY_BG).bold()),
            None => Cell::new('·', CellStyle::new(Color::new(90, 90, 100), PLAY_BG).dim()),
        };
        let px = self.origin_x.saturating_add((col as u16).saturating_mul(self.view.cell_w));
        let py = self.origin_y.saturating_add((row as u16).saturating_mul(self.view.cell_h));
        self.fb
            .fill_rect(px, py, self.view.cell_w, self.view.cell_h, cell);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.set(x, y, Cell::new('┌', style));
    fb.set(right, y, Cell::new('┐', style));
    fb.set(x, bottom, Cell::new('└', style));
    fb.set(right, bottom, Cell::new('┘', style));

    for cx in x + 1..right {
        fb.set(cx, y, Cell::new('─', style));
        fb.set(cx, bottom, Cell::new('─', style));
    }
    for cy in y + 1..bottom {
        fb.set(x, cy, Cell::new('│', style));
        fb.set(right, cy, Cell::new('│', style));
    }
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let style = CellStyle::new(Color::new(255, 255, 255), BLACK).bold();
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(rows: usize, cols: usize) -> GameSnapshot {
        GameSnapshot {
            rows,
            cols,
            grid: vec![None; rows * cols],
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn test_frame_size_tracks_grid() {
        let view = GameView::default();
        assert_eq!(view.frame_size(&snapshot(20, 10)), (22, 22));
        assert_eq!(view.frame_size(&snapshot(4, 6)), (14, 6));
    }

    #[test]
    fn test_empty_cells_show_grid_dots() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snapshot(2, 2), Viewport::new(6, 4));
        assert_eq!(fb.row_text(0), "┌────┐");
        assert_eq!(fb.row_text(1), "│····│");
        assert_eq!(fb.row_text(3), "└────┘");
    }
}
