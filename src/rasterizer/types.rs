//! Core types for the rasterizer

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Per-channel midpoint of two opaque colors (rounds down)
    pub const fn midpoint(c1: Color, c2: Color) -> Self {
        Self::new(
            ((c1.r as u16 + c2.r as u16) / 2) as u8,
            ((c1.g as u16 + c2.g as u16) / 2) as u8,
            ((c1.b as u16 + c2.b as u16) / 2) as u8,
        )
    }

    /// Same color with its alpha replaced
    pub fn alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scale the existing alpha by an opacity (0-255)
    pub fn fade(self, opacity: u8) -> Self {
        let a = (self.a as u32 * opacity as u32 + 127) / 255;
        Self { a: a as u8, ..self }
    }

    /// Source-over composite of `self` onto `dst`
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            0 => dst,
            255 => self,
            a => {
                let a = a as u32;
                let inv = 255 - a;
                let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
                Color {
                    r: mix(self.r, dst.r),
                    g: mix(self.g, dst.g),
                    b: mix(self.b, dst.b),
                    a: (a + (dst.a as u32 * inv + 127) / 255).min(255) as u8,
                }
            }
        }
    }

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::with_alpha(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// Small RGBA image blitted onto the framebuffer (e.g. the knight marker)
#[derive(Debug, Clone)]
pub struct Sprite {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl Sprite {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width * height],
        }
    }

    /// Get pixel at x,y coordinates
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            Color::TRANSPARENT
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_rounds_down() {
        let c = Color::midpoint(Color::new(240, 217, 181), Color::new(220, 197, 161));
        assert_eq!(c, Color::new(230, 207, 171));
        let c = Color::midpoint(Color::new(181, 136, 99), Color::new(161, 116, 79));
        assert_eq!(c, Color::new(171, 126, 89));
    }

    #[test]
    fn test_over_extremes() {
        let dst = Color::new(10, 20, 30);
        assert_eq!(Color::new(200, 0, 0).alpha(0).over(dst), dst);
        assert_eq!(Color::new(200, 0, 0).over(dst), Color::new(200, 0, 0));
    }

    #[test]
    fn test_over_half() {
        let out = Color::with_alpha(255, 255, 255, 128).over(Color::new(0, 0, 0));
        assert!(out.r >= 127 && out.r <= 129);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_fade() {
        assert_eq!(Color::WHITE.fade(0).a, 0);
        assert_eq!(Color::WHITE.fade(255).a, 255);
        assert_eq!(Color::with_alpha(1, 1, 1, 30).fade(255).a, 30);
    }
}
