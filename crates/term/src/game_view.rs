//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{AnchorY, BoardLayout, Viewport};
use crate::types::Position;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// How a letter tile is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Normal,
    /// Flagged by an out-of-order click, still inside the feedback window.
    Wrong,
    /// Target of the active hint.
    Hint,
}

impl TileKind {
    /// Highlight for the tile at `p`. A wrong-click flag wins over a hint.
    pub fn classify(snap: &GameSnapshot, p: Position) -> Self {
        if snap.wrong_click == Some(p) {
            TileKind::Wrong
        } else if snap.hint_active && snap.hint_position == Some(p) {
            TileKind::Hint
        } else {
            TileKind::Normal
        }
    }

    fn style(self) -> CellStyle {
        let bg = match self {
            TileKind::Normal => Rgb::new(110, 110, 120),
            TileKind::Wrong => Rgb::new(200, 50, 50),
            TileKind::Hint => Rgb::new(60, 170, 80),
        };
        CellStyle::new(Rgb::new(255, 255, 255), bg).bold()
    }
}

/// A lightweight terminal renderer for the game board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 leaves room for the HELP label and keeps cells roughly square.
        Self {
            cell_w: 4,
            cell_h: 2,
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

    /// Board placement for `viewport`; use it to map mouse clicks.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        BoardLayout::compute(viewport, self.cell_w, self.cell_h, self.anchor_y)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        // Background for play area.
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.board_w(),
            layout.board_h(),
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );

        self.draw_border(fb, &layout, border);

        for tile in snap.tiles.iter() {
            self.draw_tile(fb, &layout, *tile, TileKind::classify(snap, tile.position));
        }

        self.draw_hint_button(fb, &layout, snap);
        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.game_over {
            self.draw_overlay_text(fb, &layout, "YOU WIN");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
        let (x, y) = (layout.frame_x, layout.frame_y);
        let (w, h) = (layout.frame_w(), layout.frame_h());

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

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &BoardLayout, tile: TileSnapshot, kind: TileKind) {
        let Some((px, py)) = layout.board_to_screen(tile.position) else {
            return;
        };
        let style = kind.style();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(
            px + (self.cell_w - 1) / 2,
            py + (self.cell_h - 1) / 2,
            tile.letter.to_ascii_uppercase(),
            style,
        );
    }

    fn draw_hint_button(&self, fb: &mut FrameBuffer, layout: &BoardLayout, snap: &GameSnapshot) {
        let Some((px, py)) = layout.board_to_screen(snap.hint_button) else {
            return;
        };
        let bg = if snap.hint_active {
            Rgb::new(60, 170, 80)
        } else {
            Rgb::new(70, 90, 160)
        };
        let style = CellStyle::new(Rgb::new(255, 255, 255), bg).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        // Clip the label to the cell.
        let label = "HELP";
        let n = label.len().min(self.cell_w as usize);
        let x = px + (self.cell_w - n as u16) / 2;
        fb.put_str(x, py + (self.cell_h - 1) / 2, &label[..n], style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout
            .frame_x
            .saturating_add(layout.frame_w())
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "POINTS", label);
        y = y.saturating_add(1);
        fb.put_i32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GOAL", label);
        y = y.saturating_add(1);
        fb.put_i32(panel_x, y, snap.win_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let w = fb.put_u32(panel_x, y, snap.seconds_remaining(), value);
        fb.put_char(panel_x + w, y, 's', dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEFT", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.letters_left() as u32, value);
        y = y.saturating_add(2);

        if panel_w < 12 {
            return;
        }
        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in ["space +time", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h() / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .frame_x
            .saturating_add(layout.frame_w().saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
