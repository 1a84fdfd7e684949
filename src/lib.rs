//! # Dual Games
//!
//! A small terminal arcade hosting two minigames, Hand Cricket and Maze
//! Runner, behind a shared menu, difficulty and results flow.
//!
//! ## Architecture
//! - [`app`]: the state container and its transition methods
//! - [`screens`]: menu, difficulty and results screens plus the per-tick [`screens::Screen`] contract
//! - [`controllers`]: the running minigame, ticked like a screen
//! - [`games`]: pure game rules
//! - [`tui`]: the shell loop, canvas, backgrounds, input and drawing helpers
//!
//! ## Usage
//! ```no_run
//! use dual_games::config::Config;
//! use dual_games::tui::{self, background::BackgroundSet};
//!
//! let config = Config::default();
//! let backgrounds = BackgroundSet::from_config(&config)?;
//! tui::run(&config, backgrounds)?;
//! # Ok::<(), dual_games::error::AppError>(())
//! ```

pub mod app;
pub mod config;
pub mod controllers;
pub mod error;
pub mod games;
pub mod screens;
pub mod tui;

pub use app::{App, AppMode, Difficulty, GameMode, ResultPayload};
pub use error::{AppError, AppResult};
