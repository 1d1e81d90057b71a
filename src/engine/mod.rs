//! Animation engine - one composited frame per tour step
//!
//! - Checkerboard with chess-style cell labels
//! - Fading historical trail (markers + connecting lines)
//! - Particle bursts at the knight's current cell
//! - Step counter overlay

mod animation;
mod knight;
mod layout;
mod particles;
mod trail;

pub use animation::*;
pub use knight::*;
pub use layout::*;
pub use particles::*;
pub use trail::*;

use crate::rasterizer::Color;

/// Deep midnight blue behind everything
pub const BACKGROUND_COLOR: Color = Color::new(30, 30, 50);
pub const LIGHT_SQUARE: Color = Color::midpoint(Color::new(240, 217, 181), Color::new(220, 197, 161));
pub const DARK_SQUARE: Color = Color::midpoint(Color::new(181, 136, 99), Color::new(161, 116, 79));
pub const LABEL_COLOR: Color = Color::new(100, 100, 100);
pub const KNIGHT_COLOR: Color = Color::new(50, 50, 200);
pub const COUNTER_COLOR: Color = Color::WHITE;

/// Particle and trail colors, in trail-cycling order
pub const PALETTE: [Color; 7] = [
    Color::new(255, 0, 0),     // red
    Color::new(0, 255, 0),     // green
    Color::new(0, 0, 255),     // blue
    Color::new(255, 165, 0),   // orange
    Color::new(255, 0, 255),   // magenta
    Color::new(255, 255, 0),   // yellow
    Color::new(128, 0, 128),   // purple
];

/// Checkerboard color for a cell
pub fn square_color(row: usize, col: usize) -> Color {
    if (row + col) % 2 == 0 {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    }
}
