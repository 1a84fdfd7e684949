//! Difficulty picker shown between the menu and a game.
//!
//! "Start" stays greyed out and ignores clicks until one of the three options
//! has been chosen.

use crate::app::{App, Difficulty};
use crate::error::AppResult;
use crate::screens::{Screen, TickContext};
use crate::tui::background::Scene;
use crate::tui::canvas::Canvas;
use crate::tui::events::InputEvent;
use crate::tui::theme;
use crate::tui::widgets::{draw_centered, Button, ButtonState};
use crossterm::event::KeyCode;
use ratatui::backend::Backend;
use ratatui::layout::Rect;

pub struct DifficultyScreen {
    options: [(Difficulty, Button); 3],
    start: Button,
    back: Button,
}

impl DifficultyScreen {
    pub fn new(canvas: &Canvas) -> Self {
        let option = |difficulty: Difficulty, offset: i32| {
            (
                difficulty,
                Button::new(canvas.from_center(offset, 15, 18, 3), difficulty.label(), theme::BLUE),
            )
        };
        Self {
            options: [
                option(Difficulty::Easy, -30),
                option(Difficulty::Medium, -9),
                option(Difficulty::Hard, 12),
            ],
            start: Button::new(canvas.centered(24, 20, 3), "Start", theme::BLUE),
            back: Button::new(Rect::new(canvas.width().saturating_sub(16), 1, 14, 3), "Back", theme::GRAY),
        }
    }

    fn handle_event(&self, event: &InputEvent, app: &mut App) {
        match event {
            InputEvent::Click { col, row } => {
                if self.back.contains(*col, *row) {
                    app.to_menu();
                    return;
                }
                if let Some((difficulty, _)) = self.options.iter().find(|(_, b)| b.contains(*col, *row)) {
                    app.select_difficulty(*difficulty);
                }
                if self.start.contains(*col, *row) {
                    start_if_chosen(app);
                }
            }
            InputEvent::KeyPress(key) => match key {
                KeyCode::Char('1') => app.select_difficulty(Difficulty::Easy),
                KeyCode::Char('2') => app.select_difficulty(Difficulty::Medium),
                KeyCode::Char('3') => app.select_difficulty(Difficulty::Hard),
                KeyCode::Enter => start_if_chosen(app),
                KeyCode::Esc | KeyCode::Backspace => app.to_menu(),
                _ => {}
            },
            InputEvent::Quit => app.quit(),
        }
    }
}

fn start_if_chosen(app: &mut App) {
    if let Some(difficulty) = app.difficulty() {
        app.start_game(difficulty);
    }
}

impl Screen for DifficultyScreen {
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

        ctx.draw(Scene::Menu, |frame, canvas, app| {
            draw_centered(frame, canvas, 10, "Select Difficulty", theme::title_style());
            if let Some(game) = app.selected_game() {
                draw_centered(frame, canvas, 12, game.title(), theme::subtitle_style());
            }

            for (difficulty, button) in &self.options {
                let state = if app.difficulty() == Some(*difficulty) {
                    ButtonState::Selected
                } else {
                    ButtonState::Normal
                };
                button.draw(frame, canvas, state);
            }

            let start_state = if app.difficulty().is_some() {
                ButtonState::Normal
            } else {
                ButtonState::Disabled
            };
            self.start.draw(frame, canvas, start_state);
            self.back.draw(frame, canvas, ButtonState::Normal);
        })
    }
}
