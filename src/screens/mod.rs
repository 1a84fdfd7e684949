//! # Screens
//!
//! Every screen and every minigame controller exposes one operation, `tick`:
//! drain the input that arrived since the last frame, apply it to the
//! [`App`] through its transition methods, then draw one frame. The shell
//! decides which one to tick by matching on the current [`crate::app::AppMode`].

use crate::app::App;
use crate::error::AppResult;
use crate::tui::background::{BackgroundSet, Scene};
use crate::tui::canvas::Canvas;
use crate::tui::events::{EventSource, InputEvent};
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};
use tracing::debug;

pub mod difficulty;
pub mod menu;
pub mod result;

pub use difficulty::DifficultyScreen;
pub use menu::MenuScreen;
pub use result::ResultScreen;

/// Per-frame behaviour shared by screens and controllers
pub trait Screen {
    fn tick<B: Backend>(&mut self, ctx: &mut TickContext<'_, B>) -> AppResult<()>;
}

/// Everything a screen may touch during one tick
pub struct TickContext<'a, B: Backend> {
    pub app: &'a mut App,
    pub events: &'a mut dyn EventSource,
    pub terminal: &'a mut Terminal<B>,
    pub backgrounds: &'a BackgroundSet,
    pub canvas: Canvas,
}

impl<'a, B: Backend> TickContext<'a, B> {
    /// Pending input with clicks converted to canvas coordinates.
    ///
    /// A quit request is applied here and discards the rest of the batch;
    /// clicks that land outside the canvas are dropped.
    pub fn drain_events(&mut self) -> AppResult<Vec<InputEvent>> {
        let mut drained = Vec::new();
        for event in self.events.drain()? {
            match event {
                InputEvent::Quit => {
                    self.app.quit();
                    return Ok(Vec::new());
                }
                InputEvent::Click { col, row } => {
                    if let Some((col, row)) = self.canvas.to_local(col, row) {
                        debug!(col, row, mode = ?self.app.mode(), "click");
                        drained.push(InputEvent::Click { col, row });
                    }
                }
                key @ InputEvent::KeyPress(_) => drained.push(key),
            }
        }
        Ok(drained)
    }

    /// Paints the scene backdrop, then whatever `render` adds on top
    pub fn draw<F>(&mut self, scene: Scene, render: F) -> AppResult<()>
    where
        F: FnOnce(&mut Frame, &Canvas, &App),
    {
        let app: &App = self.app;
        let canvas = self.canvas;
        let background = self.backgrounds.get(scene);
        self.terminal.draw(|frame| {
            background.paint(frame.buffer_mut(), &canvas);
            render(frame, &canvas, app);
        })?;
        Ok(())
    }
}
