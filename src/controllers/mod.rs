//! # Minigame Controllers
//!
//! A controller runs one game from start to finish. The shell only sees the
//! [`Screen`] tick and the single [`App::finish_game`] call a controller makes
//! when its game ends.

use crate::app::{App, Difficulty, GameMode, ResultPayload};
use crate::error::AppResult;
use crate::screens::{Screen, TickContext};
use ratatui::backend::Backend;

pub mod hand_cricket;
pub mod maze_runner;

pub use hand_cricket::HandCricketController;
pub use maze_runner::MazeRunnerController;

/// The running minigame
pub enum Controller {
    HandCricket(HandCricketController),
    MazeRunner(MazeRunnerController),
}

impl Controller {
    pub fn new(game: GameMode, difficulty: Difficulty, seed: u64) -> Self {
        match game {
            GameMode::HandCricket => Controller::HandCricket(HandCricketController::new(difficulty, seed)),
            GameMode::MazeRunner => Controller::MazeRunner(MazeRunnerController::new(difficulty, seed)),
        }
    }

    pub fn game(&self) -> GameMode {
        match self {
            Controller::HandCricket(_) => GameMode::HandCricket,
            Controller::MazeRunner(_) => GameMode::MazeRunner,
        }
    }

    pub fn has_reported(&self) -> bool {
        match self {
            Controller::HandCricket(c) => c.completion.reported(),
            Controller::MazeRunner(c) => c.completion.reported(),
        }
    }
}

impl Screen for Controller {
    fn tick<B: Backend>(&mut self, ctx: &mut TickContext<'_, B>) -> AppResult<()> {
        match self {
            Controller::HandCricket(controller) => controller.tick(ctx),
            Controller::MazeRunner(controller) => controller.tick(ctx),
        }
    }
}

/// Guards the completion report so it reaches the shell once
#[derive(Debug, Default)]
pub(crate) struct Completion {
    reported: bool,
}

impl Completion {
    pub(crate) fn reported(&self) -> bool {
        self.reported
    }

    pub(crate) fn report(&mut self, app: &mut App, payload: ResultPayload) {
        if !self.reported {
            self.reported = true;
            app.finish_game(payload);
        }
    }
}
