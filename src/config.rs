//! # Runtime Configuration
//!
//! Settings the shell needs at startup. The binary fills a [`Config`] from its
//! command line; tests build one directly.

use clap::ValueEnum;
use std::path::PathBuf;

/// Width of the drawing canvas in terminal cells
pub const CANVAS_WIDTH: u16 = 100;
/// Height of the drawing canvas in terminal cells
pub const CANVAS_HEIGHT: u16 = 40;
/// Default frame rate cap
pub const DEFAULT_FPS: u32 = 60;

/// How screen backgrounds are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackgroundStyle {
    /// Flat colours, no assets required
    Solid,
    /// `bg.png`, `cricket.png`, `maze.png` and `results.png` from the asset directory
    Images,
}

/// Startup configuration for the shell
#[derive(Debug, Clone)]
pub struct Config {
    pub backgrounds: BackgroundStyle,
    pub assets_dir: PathBuf,
    /// Frame rate cap; 0 disables the cap
    pub fps: u32,
    /// Seed for gameplay randomness; fresh entropy when absent
    pub seed: Option<u64>,
    pub canvas_width: u16,
    pub canvas_height: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backgrounds: BackgroundStyle::Solid,
            assets_dir: PathBuf::from("."),
            fps: DEFAULT_FPS,
            seed: None,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
        }
    }
}

impl Config {
    /// Config with a fixed seed and no frame cap, for driving the shell headless
    pub fn headless(seed: u64) -> Self {
        Self {
            fps: 0,
            seed: Some(seed),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_canvas() {
        let config = Config::default();
        assert_eq!(config.backgrounds, BackgroundStyle::Solid);
        assert_eq!((config.canvas_width, config.canvas_height), (100, 40));
        assert_eq!(config.fps, 60);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_headless_is_uncapped_and_seeded() {
        let config = Config::headless(7);
        assert_eq!(config.fps, 0);
        assert_eq!(config.seed, Some(7));
    }
}
