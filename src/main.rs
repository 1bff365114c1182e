//! Gomoku GUI
//!
//! Hot-seat Gomoku for two players sharing one window.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gomoku::ui::GomokuApp;
use gomoku::GameConfig;

/// Play Gomoku against a friend on one screen.
#[derive(Parser)]
#[command(name = "gomoku", about = "Two-player five-in-a-row")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override the number of lines per side
    #[arg(long)]
    size: Option<usize>,

    /// Override the number of stones in a row needed to win
    #[arg(long)]
    win_length: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    if let Some(win_length) = cli.win_length {
        config.win_length = win_length;
    }
    config.validate()?;
    tracing::info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)?))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
