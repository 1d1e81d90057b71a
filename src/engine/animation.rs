//! Per-step frame composition

use rand::Rng;

use super::{
    build_trail, cell_label, centered_origin, knight_sprite, square_color, BoardLayout,
    ParticleSettings, ParticleSystem, Trail, BACKGROUND_COLOR, COUNTER_COLOR, LABEL_COLOR,
};
use crate::config::VisualizerConfig;
use crate::rasterizer::{scale_for_height, Framebuffer, Sprite};
use crate::tour::{BoardConfig, Coordinate, TourPath};

/// Screen corner of the step counter
const COUNTER_POS: (i32, i32) = (10, 10);

/// What went into a composited frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub step: usize,
    pub cell: Coordinate,
    pub trail: Trail,
    pub spawned: usize,
    pub expired: usize,
    pub live_particles: usize,
}

/// Owns the path, the particle set and the RNG; composes one frame per step
pub struct AnimationEngine<R: Rng> {
    path: TourPath,
    layout: BoardLayout,
    knight: Sprite,
    particles: ParticleSystem,
    trail_width: i32,
    label_scale: i32,
    counter_scale: i32,
    rng: R,
}

impl<R: Rng> AnimationEngine<R> {
    pub fn new(board: &BoardConfig, path: TourPath, config: &VisualizerConfig, rng: R) -> Self {
        let n = board.size() as u32;
        let layout = match config.cell_size {
            Some(cell) => BoardLayout::new(n, cell),
            None => BoardLayout::fit(
                n,
                config.display_width,
                config.display_height,
                config.display_margin,
                config.max_cell_size,
            ),
        };

        let settings = ParticleSettings {
            max_particles: config.max_particles,
            burst_min: config.burst_min,
            burst_max: config.burst_max,
            size_min: 2,
            size_max: layout.max_particle_size(),
            speed: config.particle_speed,
            lifetime_min: config.lifetime_min,
            lifetime_max: config.lifetime_max,
        };

        Self {
            knight: knight_sprite(layout.cell_size),
            label_scale: scale_for_height(layout.label_height()),
            counter_scale: scale_for_height(layout.counter_height()),
            particles: ParticleSystem::new(settings),
            trail_width: config.trail_width,
            path,
            layout,
            rng,
        }
    }

    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    /// One frame per path step
    pub fn frame_count(&self) -> usize {
        self.path.len()
    }

    /// Framebuffer sized to the canvas, cleared to the background
    pub fn new_framebuffer(&self) -> Framebuffer {
        let (w, h) = self.layout.canvas_size();
        let mut fb = Framebuffer::new(w, h);
        fb.clear(BACKGROUND_COLOR);
        fb
    }

    /// Compose the frame for `step` into `fb`. Returns `None` past the end
    /// of the path.
    pub fn render_step(&mut self, step: usize, fb: &mut Framebuffer) -> Option<FrameReport> {
        let cell = self.path.get(step)?;

        fb.clear(BACKGROUND_COLOR);
        self.draw_board(fb);

        let trail = build_trail(&self.path, step);
        self.draw_trail(fb, &trail);

        let (cx, cy) = self.layout.cell_center(cell);
        let spawned = self.particles.spawn_burst(&mut self.rng, cx as f32, cy as f32);
        let expired = self.particles.update_and_draw(fb);

        self.draw_step_counter(fb, step);

        Some(FrameReport {
            step,
            cell,
            trail,
            spawned,
            expired,
            live_particles: self.particles.len(),
        })
    }

    fn draw_board(&self, fb: &mut Framebuffer) {
        let n = self.layout.board_size;
        let c = self.layout.cell_size as i32;
        for row in 0..n {
            for col in 0..n {
                let x = col as i32 * c;
                let y = row as i32 * c;
                fb.fill_rect(x, y, c, c, square_color(row as usize, col as usize));
                fb.draw_text_centered(
                    &cell_label(row, col, n),
                    x + c / 2,
                    y + c / 2,
                    self.label_scale,
                    LABEL_COLOR,
                );
            }
        }
    }

    /// Markers oldest first; each marker is followed by the line that ends on it
    fn draw_trail(&self, fb: &mut Framebuffer, trail: &Trail) {
        for marker in &trail.markers {
            let (cx, cy) = self.layout.cell_center(marker.cell);
            let (x, y) = centered_origin(&self.knight, cx, cy);
            fb.blit_sprite(&self.knight, x, y, marker.opacity);

            if marker.step > 0 {
                let seg = &trail.segments[marker.step - 1];
                let (x0, y0) = self.layout.cell_center(seg.from);
                let (x1, y1) = self.layout.cell_center(seg.to);
                fb.draw_thick_line(x0, y0, x1, y1, self.trail_width, seg.color);
            }
        }
    }

    fn draw_step_counter(&self, fb: &mut Framebuffer, step: usize) {
        let text = format!("Step {}", step + 1);
        fb.draw_text(&text, COUNTER_POS.0, COUNTER_POS.1, self.counter_scale, COUNTER_COLOR);
    }
}
