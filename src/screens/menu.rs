//! Main menu: pick a game or exit.

use crate::app::{App, GameMode};
use crate::error::AppResult;
use crate::screens::{Screen, TickContext};
use crate::tui::background::Scene;
use crate::tui::canvas::Canvas;
use crate::tui::events::InputEvent;
use crate::tui::theme;
use crate::tui::widgets::{draw_centered, Button, ButtonState};
use crossterm::event::KeyCode;
use ratatui::backend::Backend;

pub struct MenuScreen {
    hand_cricket: Button,
    maze_runner: Button,
    exit: Button,
}

impl MenuScreen {
    pub fn new(canvas: &Canvas) -> Self {
        Self {
            hand_cricket: Button::new(canvas.centered(40, 13, 3), "Play Hand Cricket", theme::GREEN),
            maze_runner: Button::new(canvas.centered(40, 18, 3), "Play Maze Runner", theme::ORANGE),
            exit: Button::new(canvas.centered(24, 23, 3), "Exit", theme::RED),
        }
    }

    fn handle_event(&self, event: &InputEvent, app: &mut App) {
        match event {
            InputEvent::Click { col, row } => {
                if self.hand_cricket.contains(*col, *row) {
                    app.to_difficulty(GameMode::HandCricket);
                } else if self.maze_runner.contains(*col, *row) {
                    app.to_difficulty(GameMode::MazeRunner);
                } else if self.exit.contains(*col, *row) {
                    app.quit();
                }
            }
            InputEvent::KeyPress(key) => match key {
                KeyCode::Char('1') => app.to_difficulty(GameMode::HandCricket),
                KeyCode::Char('2') => app.to_difficulty(GameMode::MazeRunner),
                KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                _ => {}
            },
            InputEvent::Quit => app.quit(),
        }
    }
}

impl Screen for MenuScreen {
    fn tick<B: Backend>(&mut self, ctx: &mut TickContext<'_, B>) -> AppResult<()> {
        for event in ctx.drain_events()? {
            self.handle_event(&event, ctx.app);
            if ctx.app.should_quit {
                break;
            }
        }
        if ctx.app.should_quit {
            return Ok(());
        }

        ctx.draw(Scene::Menu, |frame, canvas, _app| {
            draw_centered(frame, canvas, 7, "Dual Games", theme::title_style());
            draw_centered(frame, canvas, 10, "Choose a game to start", theme::subtitle_style());
            self.hand_cricket.draw(frame, canvas, ButtonState::Normal);
            self.maze_runner.draw(frame, canvas, ButtonState::Normal);
            self.exit.draw(frame, canvas, ButtonState::Normal);
        })
    }
}
