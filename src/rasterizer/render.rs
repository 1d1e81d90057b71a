//! Core rendering functions
//! Alpha-blended 2D primitives on an RGBA framebuffer

use super::types::{Color, Sprite};

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            Color::from_bytes([
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ])
        } else {
            Color::TRANSPARENT
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    /// Composite `color` over the existing pixel (signed coords, clipped)
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || color.a == 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            let dst = self.get_pixel(x, y);
            self.set_pixel(x, y, color.over(dst));
        }
    }

    /// Fill an axis-aligned rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Draw a filled circle at (cx, cy) with given radius and color
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let r_sq = radius * radius;
        for y in (cy - radius).max(0)..=(cy + radius).min(self.height as i32 - 1) {
            for x in (cx - radius).max(0)..=(cx + radius).min(self.width as i32 - 1) {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= r_sq {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw a line from (x0, y0) to (x1, y1) using Bresenham's algorithm
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.blend_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a thick line as a capsule, touching each pixel once so
    /// translucent strokes blend evenly
    pub fn draw_thick_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, thickness: i32, color: Color) {
        if thickness <= 1 {
            self.draw_line(x0, y0, x1, y1, color);
            return;
        }

        let half = thickness as f32 / 2.0;
        let pad = half.ceil() as i32;
        let min_x = (x0.min(x1) - pad).max(0);
        let max_x = (x0.max(x1) + pad).min(self.width as i32 - 1);
        let min_y = (y0.min(y1) - pad).max(0);
        let max_y = (y0.max(y1) + pad).min(self.height as i32 - 1);

        let (ax, ay) = (x0 as f32, y0 as f32);
        let (bx, by) = (x1 as f32, y1 as f32);
        let (abx, aby) = (bx - ax, by - ay);
        let len_sq = abx * abx + aby * aby;
        let half_sq = half * half;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let (px, py) = (x as f32, y as f32);
                let t = if len_sq > 0.0 {
                    (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let dx = px - (ax + abx * t);
                let dy = py - (ay + aby * t);
                if dx * dx + dy * dy <= half_sq {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Blit a sprite with its top-left at (x, y), scaling its alpha by `opacity`
    pub fn blit_sprite(&mut self, sprite: &Sprite, x: i32, y: i32, opacity: u8) {
        if opacity == 0 {
            return;
        }
        for sy in 0..sprite.height {
            for sx in 0..sprite.width {
                let color = sprite.get_pixel(sx, sy).fade(opacity);
                self.blend_pixel(x + sx as i32, y + sy as i32, color);
            }
        }
    }
}

impl Sprite {
    /// Fill a triangle, replacing covered pixels (alpha included) rather than
    /// blending. Pixel centers are tested against the edges, either winding.
    pub fn fill_triangle(&mut self, p0: (f32, f32), p1: (f32, f32), p2: (f32, f32), color: Color) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let min_x = p0.0.min(p1.0).min(p2.0).floor().max(0.0) as usize;
        let max_x = p0.0.max(p1.0).max(p2.0).ceil().min(self.width as f32 - 1.0);
        let min_y = p0.1.min(p1.1).min(p2.1).floor().max(0.0) as usize;
        let max_y = p0.1.max(p1.1).max(p2.1).ceil().min(self.height as f32 - 1.0);
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }

        for y in min_y..=max_y as usize {
            for x in min_x..=max_x as usize {
                if point_in_triangle((x as f32 + 0.5, y as f32 + 0.5), p0, p1, p2) {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }
}

/// Edge-function containment test, independent of winding order
pub fn point_in_triangle(p: (f32, f32), a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> bool {
    let edge = |u: (f32, f32), v: (f32, f32)| (v.0 - u.0) * (p.1 - u.1) - (v.1 - u.1) * (p.0 - u.0);
    let e0 = edge(a, b);
    let e1 = edge(b, c);
    let e2 = edge(c, a);
    (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0)
}
