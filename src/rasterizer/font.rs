//! 5x7 bitmap font for board labels and the step counter
//!
//! Glyphs are stored as seven rows of five bits, most significant bit on the
//! left. Each glyph occupies a 6x8 cell so characters and lines get one
//! pixel of spacing before scaling.

use super::render::Framebuffer;
use super::types::Color;

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
const ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Bitmap rows for a character, if the font covers it
pub fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110],
        'c' => [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'd' => [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'f' => [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
        'g' => [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'h' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'j' => [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100],
        'k' => [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'm' => [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'p' => [0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'q' => [0b00000, 0b01111, 0b10001, 0b01111, 0b00001, 0b00001, 0b00001],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
        'u' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
        'v' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'w' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010],
        'x' => [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'y' => [0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b10001, 0b01110],
        'z' => [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        ' ' => [0; 7],
        _ => return None,
    };
    Some(rows)
}

/// Integer scale that makes a glyph roughly `pixel_height` tall (cell height 8)
pub fn scale_for_height(pixel_height: u32) -> i32 {
    ((pixel_height as f32 / 8.0).round() as i32).max(1)
}

/// Width and height of `text` at the given scale
pub fn measure_text(text: &str, scale: i32) -> (i32, i32) {
    let count = text.chars().count() as i32;
    if count == 0 {
        return (0, 0);
    }
    (count * ADVANCE * scale - scale, GLYPH_HEIGHT * scale)
}

impl Framebuffer {
    /// Draw text with its top-left corner at (x, y). Unknown glyphs leave a gap.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: i32, color: Color) {
        let mut cursor_x = x;
        for c in text.chars() {
            if let Some(rows) = glyph(c) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                            self.fill_rect(
                                cursor_x + col * scale,
                                y + row as i32 * scale,
                                scale,
                                scale,
                                color,
                            );
                        }
                    }
                }
            }
            cursor_x += ADVANCE * scale;
        }
    }

    /// Draw text centered on (cx, cy)
    pub fn draw_text_centered(&mut self, text: &str, cx: i32, cy: i32, scale: i32, color: Color) {
        let (w, h) = measure_text(text, scale);
        self.draw_text(text, cx - w / 2, cy - h / 2, scale, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage() {
        for c in ('a'..='z').chain('0'..='9') {
            assert!(glyph(c).is_some(), "missing glyph {c}");
        }
        assert!(glyph('S').is_some());
        assert!(glyph('#').is_none());
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure_text("", 3), (0, 0));
        assert_eq!(measure_text("a8", 1), (11, 7));
        assert_eq!(measure_text("Step 12", 6), (7 * 6 * 6 - 6, 42));
    }

    #[test]
    fn test_scale_for_height() {
        assert_eq!(scale_for_height(24), 3);
        assert_eq!(scale_for_height(48), 6);
        assert_eq!(scale_for_height(2), 1);
    }

    #[test]
    fn test_draw_one() {
        let mut fb = Framebuffer::new(10, 10);
        fb.clear(Color::new(0, 0, 0));
        fb.draw_text("1", 0, 0, 1, Color::WHITE);
        // top row of '1' is 0b00100
        assert_eq!(fb.get_pixel(2, 0), Color::WHITE);
        assert_eq!(fb.get_pixel(0, 0), Color::new(0, 0, 0));
        // bottom bar of '1' is 0b01110
        assert_eq!(fb.get_pixel(1, 6), Color::WHITE);
        assert_eq!(fb.get_pixel(3, 6), Color::WHITE);
    }
}
