//! Window presentation loop
//!
//! Renders one step, shows it, saves it, then holds it on screen until the
//! step interval has passed. A window close request at any point ends the
//! process immediately; after the last step the final frame stays up until
//! the window is closed.

use macroquad::prelude::*;
use ::rand::Rng;

use crate::capture::{CaptureError, ScreenshotWriter};
use crate::engine::AnimationEngine;
use crate::rasterizer::Framebuffer;

/// Holds the GPU copy of the latest frame
pub struct Presenter {
    texture: Option<Texture2D>,
}

impl Presenter {
    pub fn new() -> Self {
        Self { texture: None }
    }

    /// Upload the framebuffer as the frame to show
    pub fn upload(&mut self, fb: &Framebuffer) {
        if fb.width == 0 || fb.height == 0 {
            self.texture = None;
            return;
        }
        let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
        texture.set_filter(FilterMode::Nearest);
        self.texture = Some(texture);
    }

    /// Draw the current frame stretched over the window
    pub fn draw(&self) {
        clear_background(BLACK);
        if let Some(texture) = &self.texture {
            draw_texture_ex(
                texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(screen_width(), screen_height())),
                    ..Default::default()
                },
            );
        }
    }
}

/// Present frames until `interval` seconds have passed.
/// Returns false if the window was asked to close.
async fn hold_frame(presenter: &Presenter, interval: f64) -> bool {
    let start = get_time();
    loop {
        presenter.draw();
        next_frame().await;
        if is_quit_requested() {
            return false;
        }
        if get_time() - start >= interval {
            return true;
        }
    }
}

/// Close request mid-tour: remaining steps are abandoned
fn terminate(step: usize, total: usize) -> ! {
    tracing::info!("window closed at step {}/{}, exiting", step + 1, total);
    std::process::exit(0);
}

/// Drive the whole tour, then idle until the window is closed
pub async fn run<R: Rng>(
    mut engine: AnimationEngine<R>,
    writer: ScreenshotWriter,
    step_interval: f64,
) -> Result<usize, CaptureError> {
    prevent_quit();

    let total = engine.frame_count();
    let mut fb = engine.new_framebuffer();
    let mut presenter = Presenter::new();
    presenter.upload(&fb);

    let mut saved = 0;
    for step in 0..total {
        let Some(report) = engine.render_step(step, &mut fb) else {
            break;
        };
        presenter.upload(&fb);
        writer.save(&fb, step)?;
        saved += 1;

        tracing::debug!(
            "step {}/{} at ({}, {}): {} trail lines, +{} particles, -{} expired, {} live",
            report.step + 1,
            total,
            report.cell.x,
            report.cell.y,
            report.trail.segments.len(),
            report.spawned,
            report.expired,
            report.live_particles
        );

        if !hold_frame(&presenter, step_interval).await {
            terminate(step, total);
        }
    }

    tracing::info!(
        "tour complete: {} frames in {}, waiting for window close",
        saved,
        writer.dir().display()
    );

    // Idle: no new frames are composed, the last one stays on screen
    loop {
        presenter.draw();
        next_frame().await;
        if is_quit_requested() {
            break;
        }
    }

    Ok(saved)
}
