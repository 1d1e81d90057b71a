//! Software rasterizer for 2D frames
//!
//! Everything is drawn into an RGBA framebuffer so the same pixels can be
//! uploaded to the window and written out as screenshots.
//! - Source-over alpha blending on every primitive
//! - Circles, capsule lines, triangles, sprites
//! - Built-in 5x7 bitmap font

mod font;
mod render;
mod types;

pub use font::*;
pub use render::*;
pub use types::*;
