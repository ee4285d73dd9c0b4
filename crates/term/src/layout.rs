//! Board placement on screen and conversions between board and screen cells.

use crate::types::{Position, GRID_COLUMNS, GRID_ROWS};

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

/// Where the bordered board sits inside a viewport.
///
/// `frame_x`/`frame_y` is the top-left border corner; board cell `(0, 0)` starts
/// one column and one row inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardLayout {
    /// Center the board horizontally and anchor it vertically.
    pub fn compute(viewport: Viewport, cell_w: u16, cell_h: u16, anchor_y: AnchorY) -> Self {
        let mut layout = Self {
            frame_x: 0,
            frame_y: 0,
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        };
        layout.frame_x = viewport.width.saturating_sub(layout.frame_w()) / 2;
        layout.frame_y = match anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(layout.frame_h()) / 2,
            AnchorY::Top => 0,
        };
        layout
    }

    pub fn board_w(&self) -> u16 {
        GRID_COLUMNS as u16 * self.cell_w
    }

    pub fn board_h(&self) -> u16 {
        GRID_ROWS as u16 * self.cell_h
    }

    /// Board plus border.
    pub fn frame_w(&self) -> u16 {
        self.board_w() + 2
    }

    pub fn frame_h(&self) -> u16 {
        self.board_h() + 2
    }

    /// Top-left screen cell of board cell `p`, or None off the board.
    pub fn board_to_screen(&self, p: Position) -> Option<(u16, u16)> {
        if !p.in_grid() {
            return None;
        }
        let x = self.frame_x + 1 + p.x as u16 * self.cell_w;
        let y = self.frame_y + 1 + p.y as u16 * self.cell_h;
        Some((x, y))
    }

    /// Board cell under screen cell `(x, y)`, or None outside the board area.
    pub fn screen_to_board(&self, x: u16, y: u16) -> Option<Position> {
        let left = self.frame_x + 1;
        let top = self.frame_y + 1;
        if x < left || y < top {
            return None;
        }
        let bx = (x - left) / self.cell_w;
        let by = (y - top) / self.cell_h;
        if bx >= GRID_COLUMNS as u16 || by >= GRID_ROWS as u16 {
            return None;
        }
        Some(Position::new(bx as i16, by as i16))
    }
}
