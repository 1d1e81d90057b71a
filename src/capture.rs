//! Screenshot output
//!
//! Every composited frame is written as `step_NN.png` (1-indexed, at least
//! two digits) into a directory created once at startup.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::rasterizer::Framebuffer;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("framebuffer {width}x{height} does not match its pixel data")]
    BufferSize { width: usize, height: usize },
    #[error("failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// File name for a 0-based step index
pub fn screenshot_name(step: usize) -> String {
    format!("step_{:02}.png", step + 1)
}

/// Writes numbered PNG screenshots into one directory
#[derive(Debug, Clone)]
pub struct ScreenshotWriter {
    dir: PathBuf,
}

impl ScreenshotWriter {
    /// Create the output directory (if needed) and return a writer for it
    pub fn init<P: AsRef<Path>>(dir: P) -> Result<Self, CaptureError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| CaptureError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, step: usize) -> PathBuf {
        self.dir.join(screenshot_name(step))
    }

    /// Encode the framebuffer as PNG for the given 0-based step
    pub fn save(&self, fb: &Framebuffer, step: usize) -> Result<PathBuf, CaptureError> {
        let path = self.path_for(step);
        let image = to_image(fb)?;
        image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| CaptureError::Encode {
                path: path.clone(),
                source,
            })?;
        tracing::debug!("saved {}", path.display());
        Ok(path)
    }
}

fn to_image(fb: &Framebuffer) -> Result<RgbaImage, CaptureError> {
    RgbaImage::from_raw(fb.width as u32, fb.height as u32, fb.pixels.clone()).ok_or(
        CaptureError::BufferSize {
            width: fb.width,
            height: fb.height,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisualizerConfig;
    use crate::engine::{AnimationEngine, BACKGROUND_COLOR};
    use crate::tour::{parse_board_str, parse_path_str};

    fn saved_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    fn render_all(board: &str, path: &str, out: &Path) -> usize {
        let config = VisualizerConfig {
            seed: Some(9),
            cell_size: Some(24),
            ..Default::default()
        };
        let rng = config.rng();
        let mut engine = AnimationEngine::new(
            &parse_board_str(board).unwrap(),
            parse_path_str(path).unwrap(),
            &config,
            rng,
        );
        let writer = ScreenshotWriter::init(out).unwrap();
        let mut fb = engine.new_framebuffer();
        let mut saved = 0;
        for step in 0..engine.frame_count() {
            engine.render_step(step, &mut fb).unwrap();
            writer.save(&fb, step).unwrap();
            saved += 1;
        }
        saved
    }

    #[test]
    fn test_names_zero_padded_one_indexed() {
        assert_eq!(screenshot_name(0), "step_01.png");
        assert_eq!(screenshot_name(8), "step_09.png");
        assert_eq!(screenshot_name(99), "step_100.png");
    }

    #[test]
    fn test_init_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("knight_tour_tracking");
        let writer = ScreenshotWriter::init(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(writer.path_for(1), dir.join("step_02.png"));
    }

    #[test]
    fn test_one_file_per_step() {
        let tmp = tempfile::tempdir().unwrap();
        let path: String = (0..12)
            .map(|i| format!("Step {}: ({}, {})\n", i + 1, i % 4, i / 4))
            .collect();
        let saved = render_all("0 0 0 0\n0 0 0 0\n0 0 0 0\n0 0 0 0", &path, tmp.path());
        assert_eq!(saved, 12);

        let names = saved_files(tmp.path());
        let expected: Vec<String> = (0..12).map(screenshot_name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_two_step_files() {
        let tmp = tempfile::tempdir().unwrap();
        let saved = render_all("0 0\n0 0", "Step 1: (0,0)\nStep 2: (1,1)\n", tmp.path());
        assert_eq!(saved, 2);
        assert_eq!(saved_files(tmp.path()), vec!["step_01.png", "step_02.png"]);

        let img = image::open(tmp.path().join("step_02.png")).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (48, 48));
    }

    #[test]
    fn test_no_steps_no_files() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("shots");
        let saved = render_all("0 0\n0 0", "nothing to see\n", &out);
        assert_eq!(saved, 0);
        assert!(out.is_dir());
        assert!(saved_files(&out).is_empty());
    }

    #[test]
    fn test_roundtrip_pixels() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = ScreenshotWriter::init(tmp.path()).unwrap();
        let mut fb = Framebuffer::new(3, 2);
        fb.clear(BACKGROUND_COLOR);
        let path = writer.save(&fb, 0).unwrap();
        let img = image::open(path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(2, 1).0, BACKGROUND_COLOR.to_bytes());
    }
}
