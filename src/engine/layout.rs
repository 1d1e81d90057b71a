//! Board-to-pixel layout

use crate::tour::Coordinate;

/// Pixel positions are clamped to this magnitude. Off-board cells from an
/// unchecked path land far off-screen, and the primitives still have room
/// to add offsets without overflowing.
const PIXEL_LIMIT: i64 = 1 << 24;

/// Cell size and derived measurements for an N x N board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub board_size: u32,
    pub cell_size: u32,
}

impl BoardLayout {
    pub fn new(board_size: u32, cell_size: u32) -> Self {
        Self {
            board_size,
            cell_size: cell_size.max(1),
        }
    }

    /// Largest cell size that keeps the whole board inside the display
    /// (minus margin), capped at `max_cell`
    pub fn fit(board_size: u32, display_w: u32, display_h: u32, margin: u32, max_cell: u32) -> Self {
        let n = board_size.max(1);
        let cell_w = display_w.saturating_sub(margin) / n;
        let cell_h = display_h.saturating_sub(margin) / n;
        Self::new(board_size, cell_w.min(cell_h).min(max_cell))
    }

    /// Canvas size in pixels (square)
    pub fn canvas_size(&self) -> (usize, usize) {
        let side = (self.cell_size * self.board_size) as usize;
        (side, side)
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, cell: Coordinate) -> (i32, i32) {
        let c = self.cell_size as i64;
        let px = |v: i32| (v as i64 * c).clamp(-PIXEL_LIMIT, PIXEL_LIMIT) as i32;
        (px(cell.x), px(cell.y))
    }

    /// Center pixel of a cell
    pub fn cell_center(&self, cell: Coordinate) -> (i32, i32) {
        let (x, y) = self.cell_origin(cell);
        let half = (self.cell_size / 2) as i32;
        (x + half, y + half)
    }

    /// Glyph height of the per-cell coordinate labels
    pub fn label_height(&self) -> u32 {
        (self.cell_size / 5).max(24)
    }

    /// Glyph height of the step counter
    pub fn counter_height(&self) -> u32 {
        ((self.cell_size as f32 / 2.5) as u32).max(48)
    }

    /// Largest particle radius
    pub fn max_particle_size(&self) -> i32 {
        ((self.cell_size / 20) as i32).max(3)
    }
}

/// Chess-style label for a cell: column letter, then rank counted from the bottom
pub fn cell_label(row: u32, col: u32, board_size: u32) -> String {
    let file = char::from_u32('a' as u32 + col).unwrap_or('?');
    format!("{}{}", file, board_size as i64 - row as i64)
}
