//! GameView: maps a `StageSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::StageSnapshot;
use crate::fb::{FrameBuffer, Glyph, Ink};
use crate::types::MIN_ROWS;

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

/// Session-level numbers that are not part of the stage snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub best_score: u32,
}

/// A lightweight terminal renderer for the stage.
pub struct GameView {
    /// Stage cell width in terminal columns.
    cell_w: u16,
    /// Stage cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 leaves room for the character glyph between two platform halves.
        Self {
            cell_w: 3,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
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

    /// How many stage rows fit in `viewport` inside the border.
    ///
    /// Never below the engine minimum; a too-short terminal clips the bottom.
    pub fn rows_for_viewport(&self, viewport: Viewport) -> usize {
        let inner = viewport.height.saturating_sub(2) / self.cell_h;
        (inner as usize).max(MIN_ROWS)
    }

    /// Render the stage into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &StageSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_hud(snap, None, viewport, fb);
    }

    pub fn render_into_with_hud(
        &self,
        snap: &StageSnapshot,
        hud: Option<&HudView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::BLANK);

        let columns = u16::try_from(snap.columns).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.rows).unwrap_or(u16::MAX);
        let stage_px_w = columns.saturating_mul(self.cell_w);
        let stage_px_h = rows.saturating_mul(self.cell_h);
        let frame_w = stage_px_w.saturating_add(2);
        let frame_h = stage_px_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(
            start_x.saturating_add(1),
            start_y.saturating_add(1),
            stage_px_w,
            stage_px_h,
            Glyph::new(' ', Ink::Stage),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Cells past u16 are off-screen anyway.
        for (y, row) in (0..rows).zip(snap.iter_rows()) {
            for (x, cell) in (0..columns).zip(row) {
                if cell.is_platform {
                    let platform = Glyph::new('▄', Ink::Platform);
                    self.fill_cell_rect(fb, start_x, start_y, x, y, platform);
                }
                if cell.has_character {
                    self.draw_character(fb, start_x, start_y, x, y);
                }
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &StageSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_hud(
        &self,
        snap: &StageSnapshot,
        hud: Option<&HudView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        let edge = |ch| Glyph::new(ch, Ink::Border);

        fb.fill_rect(x, y, w, 1, edge('─'));
        fb.fill_rect(x, bottom, w, 1, edge('─'));
        fb.fill_rect(x, y, 1, h, edge('│'));
        fb.fill_rect(right, y, 1, h, edge('│'));

        fb.put(x, y, edge('┌'));
        fb.put(right, y, edge('┐'));
        fb.put(x, bottom, edge('└'));
        fb.put(right, bottom, edge('┘'));
    }

    /// Top-left terminal position of stage cell `(x, y)`.
    fn cell_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (
            start_x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w)),
            start_y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h)),
        )
    }

    fn draw_character(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        // Sit on the bottom line of the cell, horizontally centred.
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.put(
            px.saturating_add(self.cell_w / 2),
            py.saturating_add(self.cell_h - 1),
            Glyph::new('●', Ink::Character),
        );
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        glyph: Glyph,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &StageSnapshot,
        hud: Option<&HudView>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let mut y = start_y;
        fb.text(panel_x, y, "SCORE", Ink::Label);
        y = y.saturating_add(1);
        fb.number(panel_x, y, snap.score, Ink::Value);
        y = y.saturating_add(2);

        if let Some(hud) = hud {
            fb.text(panel_x, y, "BEST", Ink::Label);
            y = y.saturating_add(1);
            fb.number(panel_x, y, hud.best_score, Ink::Value);
            y = y.saturating_add(2);
        }

        fb.text(panel_x, y, "RUN", Ink::Label);
        y = y.saturating_add(1);
        fb.number(panel_x, y, snap.episode_id.saturating_add(1), Ink::Value);
        y = y.saturating_add(2);

        for hint in ["<- -> hop", "r  restart", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.text(panel_x, y, hint, Ink::Hint);
            y = y.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn tiny_snapshot() -> StageSnapshot {
        let mut cells = vec![Cell::EMPTY; 3 * 4];
        cells[1] = Cell::PLATFORM;
        cells[3 + 2] = Cell::PLATFORM;
        cells[2 * 3 + 1] = Cell::CHARACTER;
        StageSnapshot {
            columns: 3,
            rows: 4,
            character_row: 2,
            character_column: 1,
            cells,
            ..StageSnapshot::default()
        }
    }

    #[test]
    fn rows_for_viewport_subtracts_border() {
        let view = GameView::default();
        assert_eq!(view.rows_for_viewport(Viewport::new(80, 24)), 22);
        assert_eq!(view.rows_for_viewport(Viewport::new(80, 3)), MIN_ROWS);
    }

    #[test]
    fn platform_fills_the_whole_cell_width() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        // 3 columns * 3 chars + border = 11 wide.
        let fb = view.render(&tiny_snapshot(), Viewport::new(11, 6));

        assert_eq!(fb.row_text(1), "│   ▄▄▄   │");
        assert_eq!(fb.row_text(2), "│      ▄▄▄│");
        assert_eq!(fb.row_text(3), "│   ▄●▄   │");
    }

    #[test]
    fn glyphs_carry_stage_inks() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&tiny_snapshot(), Viewport::new(11, 6));

        assert_eq!(fb.get(0, 0).map(|g| g.ink), Some(Ink::Border));
        assert_eq!(fb.get(1, 1).map(|g| g.ink), Some(Ink::Stage));
        assert_eq!(fb.get(4, 1).map(|g| g.ink), Some(Ink::Platform));
        assert_eq!(fb.get(5, 3).map(|g| g.ink), Some(Ink::Character));
    }

    #[test]
    fn oversized_snapshot_renders_clipped() {
        let columns = 70_000;
        let mut cells = vec![Cell::EMPTY; columns * 4];
        cells[columns - 1] = Cell::PLATFORM;
        let snap = StageSnapshot {
            columns,
            rows: 4,
            cells,
            ..StageSnapshot::default()
        };
        let fb = GameView::default().render(&snap, Viewport::new(20, 8));
        assert_eq!(fb.width(), 20);
        assert_eq!(fb.get(0, 0).map(|g| g.ch), Some(' '));
    }

    #[test]
    fn side_panel_shows_best_score() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let mut snap = tiny_snapshot();
        snap.score = 7;
        let hud = HudView { best_score: 42 };
        let fb = view.render_with_hud(&snap, Some(&hud), Viewport::new(40, 12));

        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(all.contains("SCORE"));
        assert!(all.contains("BEST"));
        assert!(all.contains("42"));
    }
}
