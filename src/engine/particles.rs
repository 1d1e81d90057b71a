//! Particle bursts around the knight

use rand::seq::SliceRandom;
use rand::Rng;

use super::PALETTE;
use crate::rasterizer::{Color, Framebuffer};

/// Short-lived decorative dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub size: i32,
    pub dx: f32,
    pub dy: f32,
    /// Remaining frames
    pub life: i32,
}

impl Particle {
    fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
        self.life -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// Random ranges used when spawning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSettings {
    pub max_particles: usize,
    pub burst_min: usize,
    pub burst_max: usize,
    pub size_min: i32,
    pub size_max: i32,
    pub speed: f32,
    pub lifetime_min: i32,
    pub lifetime_max: i32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            max_particles: 50,
            burst_min: 5,
            burst_max: 10,
            size_min: 2,
            size_max: 3,
            speed: 2.0,
            lifetime_min: 30,
            lifetime_max: 60,
        }
    }
}

/// Live particle set, capped at `settings.max_particles`
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub settings: ParticleSettings,
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new(settings: ParticleSettings) -> Self {
        Self {
            settings,
            particles: Vec::with_capacity(settings.max_particles),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn a burst at (x, y) unless the set is full. The burst is cut
    /// short so the cap is never exceeded. Returns how many were created.
    pub fn spawn_burst<R: Rng>(&mut self, rng: &mut R, x: f32, y: f32) -> usize {
        let s = self.settings;
        if self.particles.len() >= s.max_particles {
            return 0;
        }
        let wanted = rng.gen_range(s.burst_min..=s.burst_max);
        let count = wanted.min(s.max_particles - self.particles.len());

        for _ in 0..count {
            let particle = Particle {
                x,
                y,
                color: *PALETTE.choose(rng).unwrap_or(&Color::WHITE),
                size: rng.gen_range(s.size_min..=s.size_max.max(s.size_min)),
                dx: random_speed(rng, s.speed),
                dy: random_speed(rng, s.speed),
                life: rng.gen_range(s.lifetime_min..=s.lifetime_max),
            };
            self.particles.push(particle);
        }
        count
    }

    /// Move every particle one frame, draw it, then drop the expired ones.
    /// Returns how many were removed.
    pub fn update_and_draw(&mut self, fb: &mut Framebuffer) -> usize {
        for p in &mut self.particles {
            p.advance();
            fb.draw_circle(p.x as i32, p.y as i32, p.size, p.color);
        }
        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        before - self.particles.len()
    }
}

fn random_speed<R: Rng>(rng: &mut R, speed: f32) -> f32 {
    if speed > 0.0 {
        rng.gen_range(-speed..=speed)
    } else {
        0.0
    }
}
