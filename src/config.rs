//! Visualizer configuration
//!
//! Uses RON (Rusty Object Notation) like the rest of the project. Every
//! field is optional; anything left out falls back to the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "knight_tour.ron";

/// Default window title
pub const WINDOW_TITLE: &str = "Magical Knight's Mystical Tour";

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Board file (one row of integers per line)
    pub board_file: PathBuf,
    /// Path file (`Step n: (x, y)` lines)
    pub path_file: PathBuf,
    /// Screenshot directory, created at startup
    pub output_dir: PathBuf,
    /// Window title, applied when the window is created
    pub window_title: String,
    /// Animation cadence (steps per second)
    pub frames_per_second: f32,
    /// Display area the board has to fit in
    pub display_width: u32,
    pub display_height: u32,
    /// Space kept free around the board when fitting
    pub display_margin: u32,
    /// Upper bound for the computed cell size
    pub max_cell_size: u32,
    /// Fixed cell size, skips the fitting computation
    pub cell_size: Option<u32>,
    /// Live particle cap
    pub max_particles: usize,
    /// Particles per burst (inclusive range)
    pub burst_min: usize,
    pub burst_max: usize,
    /// Particle lifetime in frames (inclusive range)
    pub lifetime_min: i32,
    pub lifetime_max: i32,
    /// Max absolute particle speed per axis, in pixels per frame
    pub particle_speed: f32,
    /// Stroke width of the trail lines
    pub trail_width: i32,
    /// Fixed RNG seed for reproducible particles
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            board_file: PathBuf::from("board.txt"),
            path_file: PathBuf::from("path.txt"),
            output_dir: PathBuf::from("knight_tour_tracking"),
            window_title: WINDOW_TITLE.to_string(),
            frames_per_second: 2.0,
            display_width: 1920,
            display_height: 1080,
            display_margin: 100,
            max_cell_size: 150,
            cell_size: None,
            max_particles: 50,
            burst_min: 5,
            burst_max: 10,
            lifetime_min: 30,
            lifetime_max: 60,
            particle_speed: 2.0,
            trail_width: 5,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    /// Parse a config from a RON string
    pub fn from_ron_str(s: &str, path: &Path) -> Result<Self, ConfigError> {
        ron::from_str::<Self>(s)
            .map(Self::sanitized)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load a config from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&contents, path)
    }

    /// Load the explicitly named config, or the default file if it exists,
    /// or fall back to built-in defaults
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Config for the command line: first positional argument, if any
    pub fn from_args() -> Result<Self, ConfigError> {
        Self::resolve(std::env::args().nth(1).map(PathBuf::from))
    }

    /// Fix up inverted ranges and non-positive rates
    fn sanitized(mut self) -> Self {
        if self.burst_min > self.burst_max {
            tracing::warn!(
                "burst_min {} > burst_max {}, swapping",
                self.burst_min,
                self.burst_max
            );
            std::mem::swap(&mut self.burst_min, &mut self.burst_max);
        }
        if self.lifetime_min > self.lifetime_max {
            tracing::warn!(
                "lifetime_min {} > lifetime_max {}, swapping",
                self.lifetime_min,
                self.lifetime_max
            );
            std::mem::swap(&mut self.lifetime_min, &mut self.lifetime_max);
        }
        if !(self.frames_per_second > 0.0) {
            tracing::warn!("frames_per_second must be positive, using 2");
            self.frames_per_second = 2.0;
        }
        self.particle_speed = self.particle_speed.abs();
        self
    }

    /// Particle RNG: seeded when configured, from entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Time each step stays on screen, in seconds
    pub fn step_interval(&self) -> f64 {
        1.0 / self.frames_per_second as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VisualizerConfig::default();
        assert_eq!(config.max_particles, 50);
        assert_eq!(config.output_dir, PathBuf::from("knight_tour_tracking"));
        assert_eq!(config.window_title, WINDOW_TITLE);
        assert!((config.step_interval() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_partial_ron() {
        let config = VisualizerConfig::from_ron_str(
            "(path_file: \"tour.txt\", seed: Some(7), max_cell_size: 80)",
            Path::new("inline.ron"),
        )
        .unwrap();
        assert_eq!(config.path_file, PathBuf::from("tour.txt"));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_cell_size, 80);
        assert_eq!(config.board_file, PathBuf::from("board.txt"));
        assert_eq!(config.window_title, WINDOW_TITLE);
    }

    #[test]
    fn test_window_title_override() {
        let config = VisualizerConfig::from_ron_str(
            "(window_title: \"Tour of 8x8\")",
            Path::new("inline.ron"),
        )
        .unwrap();
        assert_eq!(config.window_title, "Tour of 8x8");
        assert_eq!(config.frames_per_second, 2.0);
    }

    #[test]
    fn test_sanitize_ranges() {
        let config = VisualizerConfig::from_ron_str(
            "(burst_min: 9, burst_max: 3, frames_per_second: 0.0)",
            Path::new("inline.ron"),
        )
        .unwrap();
        assert_eq!((config.burst_min, config.burst_max), (3, 9));
        assert_eq!(config.frames_per_second, 2.0);
    }

    #[test]
    fn test_malformed_ron() {
        let err = VisualizerConfig::from_ron_str("(seed: \"x\"", Path::new("bad.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_missing_is_error() {
        let err = VisualizerConfig::resolve(Some(PathBuf::from("/no/such/knight_tour.ron"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_seeded_rng_repeats() {
        use rand::Rng;
        let config = VisualizerConfig {
            seed: Some(42),
            ..Default::default()
        };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
