//! Knight marker sprite: a solid triangle with a faint layered glow

use super::KNIGHT_COLOR;
use crate::rasterizer::Sprite;

/// Glow layers; layer `i` is the triangle scaled by `1 + 0.05 * i`
const GLOW_LAYERS: u32 = 10;

fn knight_triangle(cell: f32, scale: f32) -> [(f32, f32); 3] {
    [
        (cell * 0.3 * scale, cell * 0.7 * scale),
        (cell * 0.7 * scale, cell * 0.7 * scale),
        (cell * 0.5 * scale, cell * 0.3 * scale),
    ]
}

/// Build the `cell x cell` marker sprite.
///
/// Glow layers are scaled about the sprite origin, so the halo leans
/// towards the bottom-right. Layers are painted outermost first with alpha
/// `30 - i`, each replacing the one below, then the solid body on top.
pub fn knight_sprite(cell_size: u32) -> Sprite {
    let size = cell_size as usize;
    let cell = cell_size as f32;
    let mut sprite = Sprite::new(size, size);

    for i in (1..=GLOW_LAYERS).rev() {
        let [a, b, c] = knight_triangle(cell, 1.0 + i as f32 * 0.05);
        sprite.fill_triangle(a, b, c, KNIGHT_COLOR.alpha((30 - i) as u8));
    }

    let [a, b, c] = knight_triangle(cell, 1.0);
    sprite.fill_triangle(a, b, c, KNIGHT_COLOR);

    sprite
}

/// Top-left position that centers a sprite on (cx, cy)
pub fn centered_origin(sprite: &Sprite, cx: i32, cy: i32) -> (i32, i32) {
    (cx - sprite.width as i32 / 2, cy - sprite.height as i32 / 2)
}
