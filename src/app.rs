//! # Application State
//!
//! The state container shared by every screen and controller. Screens never
//! assign fields directly: every change goes through one of the transition
//! methods on [`App`], which keep the mode, the selected game, the difficulty,
//! the running controller and the last result consistent with each other.

use crate::controllers::Controller;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt;
use tracing::{info, warn};

/// Current screen of the application
///
/// Controls which screen is ticked and drawn. The application moves between
/// these only through the transition methods on [`App`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Menu,
    Difficulty,
    InGame,
    Result,
}

/// Which minigame the player picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HandCricket,
    MazeRunner,
}

impl GameMode {
    pub fn title(self) -> &'static str {
        match self {
            GameMode::HandCricket => "Hand Cricket",
            GameMode::MazeRunner => "Maze Runner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered label/value pairs a finished game hands to the results screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPayload {
    entries: Vec<(String, String)>,
}

impl ResultPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, or replaces the value in place if the label exists
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(label, value);
        self
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(label, value)| (label.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for ResultPayload {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut payload = ResultPayload::new();
        for (label, value) in iter {
            payload.insert(label, value);
        }
        payload
    }
}

/// The main application state
pub struct App {
    pub should_quit: bool,
    mode: AppMode,
    selected_game: Option<GameMode>,
    difficulty: Option<Difficulty>,
    controller: Option<Controller>,
    result_payload: Option<ResultPayload>,
    seeds: Xoshiro256PlusPlus,
}

impl App {
    /// Creates the state container; `seed` makes every game deterministic
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            should_quit: false,
            mode: AppMode::Menu,
            selected_game: None,
            difficulty: None,
            controller: None,
            result_payload: None,
            seeds: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn selected_game(&self) -> Option<GameMode> {
        self.selected_game
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn controller(&self) -> Option<&Controller> {
        self.controller.as_ref()
    }

    pub fn result_payload(&self) -> Option<&ResultPayload> {
        self.result_payload.as_ref()
    }

    /// Full reset back to the main menu
    pub fn to_menu(&mut self) {
        info!(from = ?self.mode, "returning to menu");
        self.mode = AppMode::Menu;
        self.selected_game = None;
        self.difficulty = None;
        self.controller = None;
        self.result_payload = None;
    }

    pub fn to_difficulty(&mut self, game: GameMode) {
        info!(game = game.title(), "choosing difficulty");
        self.selected_game = Some(game);
        self.difficulty = None;
        self.controller = None;
        self.result_payload = None;
        self.mode = AppMode::Difficulty;
    }

    /// Records the highlighted option on the difficulty screen
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.mode == AppMode::Difficulty {
            self.difficulty = Some(difficulty);
        }
    }

    /// Builds the controller for the selected game and enters play.
    ///
    /// Without a selected game no controller exists; the shell notices on the
    /// next tick and falls back to the menu.
    pub fn start_game(&mut self, difficulty: Difficulty) {
        self.difficulty = Some(difficulty);
        self.result_payload = None;
        let seed = self.seeds.random::<u64>();
        self.controller = self
            .selected_game
            .map(|game| Controller::new(game, difficulty, seed));
        match self.selected_game {
            Some(game) => info!(game = game.title(), %difficulty, "starting game"),
            None => warn!(%difficulty, "starting game with no game selected"),
        }
        self.mode = AppMode::InGame;
    }

    /// Stores a finished game's report; ignored unless a game is running
    pub fn finish_game(&mut self, payload: ResultPayload) {
        if self.mode != AppMode::InGame {
            warn!(mode = ?self.mode, "game report outside of play ignored");
            return;
        }
        info!(entries = payload.len(), "game finished");
        self.result_payload = Some(payload);
        self.mode = AppMode::Result;
    }

    /// Restarts the same game at the same difficulty
    pub fn play_again(&mut self) {
        if let Some(difficulty) = self.difficulty {
            self.start_game(difficulty);
        }
    }

    pub fn change_difficulty(&mut self) {
        match self.selected_game {
            Some(game) => self.to_difficulty(game),
            None => self.to_menu(),
        }
    }

    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    /// Lends the running controller out for one tick
    pub(crate) fn take_controller(&mut self) -> Option<Controller> {
        self.controller.take()
    }

    /// Hands a ticked controller back unless the tick replaced or dropped it
    pub(crate) fn restore_controller(&mut self, controller: Controller) {
        let still_wanted = matches!(self.mode, AppMode::InGame | AppMode::Result);
        if still_wanted && self.controller.is_none() {
            self.controller = Some(controller);
        }
    }

    #[cfg(test)]
    pub(crate) fn force_mode(&mut self, mode: AppMode) {
        self.mode = mode;
    }
}
