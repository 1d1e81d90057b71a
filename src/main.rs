//! Knight Tour Visualizer: animated replay of a pre-computed knight's tour
//!
//! Reads a board file and a path file, then renders one frame per step:
//! - Checkerboard with chess-style labels
//! - Fading trail of earlier moves
//! - Particle bursts around the knight
//! - One PNG screenshot per step

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod capture;
mod config;
mod engine;
mod rasterizer;
mod tour;

use anyhow::{ensure, Context};
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use capture::ScreenshotWriter;
use config::{VisualizerConfig, WINDOW_TITLE};
use engine::AnimationEngine;
use tour::{load_board, load_path};

/// The window exists before `main` runs, so the title is read from the
/// config here. Config errors are reported once `run` loads it again.
fn window_conf() -> Conf {
    let window_title = VisualizerConfig::from_args()
        .map(|config| config.window_title)
        .unwrap_or_else(|_| WINDOW_TITLE.to_string());
    Conf {
        window_title,
        window_width: 800,
        window_height: 800,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("knight_tour_viz=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing::info!("=== Knight Tour Visualizer v{} ===", VERSION);

    let config = VisualizerConfig::from_args().context("loading configuration")?;

    let board = load_board(&config.board_file)
        .with_context(|| format!("loading board from {}", config.board_file.display()))?;
    ensure!(board.size() > 0, "board file {} has no rows", config.board_file.display());

    let path = load_path(&config.path_file)
        .with_context(|| format!("loading path from {}", config.path_file.display()))?;
    tracing::info!("board {}x{}, {} steps", board.size(), board.size(), path.len());
    if path.is_empty() {
        tracing::warn!("no 'Step' lines in {}", config.path_file.display());
    }

    let writer = ScreenshotWriter::init(&config.output_dir)?;

    let engine = AnimationEngine::new(&board, path, &config, config.rng());
    let (w, h) = engine.layout().canvas_size();
    tracing::info!("cell size {}px, canvas {}x{}", engine.layout().cell_size, w, h);

    request_new_screen_size(w as f32, h as f32);
    next_frame().await;

    let saved = app::run(engine, writer, config.step_interval()).await?;
    tracing::info!("saved {} screenshots", saved);
    Ok(())
}
