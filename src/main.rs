//! # Dual Games
//!
//! Entry point for the terminal arcade. Parses the command line, sets up file
//! logging (the terminal itself belongs to the UI), loads the backgrounds and
//! hands control to the shell loop.
//!
//! ## Usage
//! Run with `cargo run --release`. Pass `--backgrounds images` to paint the
//! screens with `bg.png`, `cricket.png`, `maze.png` and `results.png` from the
//! asset directory.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use dual_games::config::{BackgroundStyle, Config, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_FPS};
use dual_games::tui::{self, background::BackgroundSet};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Background strategy for every screen
    #[clap(long, value_enum, default_value_t = BackgroundStyle::Solid)]
    backgrounds: BackgroundStyle,

    /// Directory holding the background images
    #[clap(long, default_value = ".")]
    assets_dir: PathBuf,

    /// Frame rate cap (0 for uncapped)
    #[clap(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Seed for reproducible games
    #[clap(long)]
    seed: Option<u64>,

    /// Where log output goes
    #[clap(long, default_value = "dual-games.log")]
    log_file: PathBuf,
}

impl Args {
    fn to_config(&self) -> Config {
        Config {
            backgrounds: self.backgrounds,
            assets_dir: self.assets_dir.clone(),
            fps: self.fps,
            seed: self.seed,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
        }
    }
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("installing the log subscriber")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_file)?;

    let config = args.to_config();
    tracing::info!(?config, "starting");

    // assets are checked before the terminal is taken over
    let backgrounds = BackgroundSet::from_config(&config).context("loading backgrounds")?;
    tui::run(&config, backgrounds).context("running the arcade")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_log_subscriber_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        init_tracing(&dir.path().join("first.log")).unwrap();
        let err = init_tracing(&dir.path().join("second.log")).unwrap_err();
        assert!(err.to_string().contains("installing the log subscriber"));
    }
}
