//! Results screen: lists whatever the finished game reported, in order.

use crate::app::App;
use crate::error::AppResult;
use crate::screens::{Screen, TickContext};
use crate::tui::background::Scene;
use crate::tui::canvas::Canvas;
use crate::tui::events::InputEvent;
use crate::tui::theme;
use crate::tui::widgets::{draw_centered, draw_label, Button, ButtonState};
use crossterm::event::KeyCode;
use ratatui::backend::Backend;

const FIRST_ROW: u16 = 10;
const ROW_STEP: u16 = 2;

pub struct ResultScreen {
    play_again: Button,
    change_difficulty: Button,
    menu: Button,
}

impl ResultScreen {
    pub fn new(canvas: &Canvas) -> Self {
        Self {
            play_again: Button::new(canvas.from_center(-36, 28, 22, 3), "Play Again", theme::GREEN),
            change_difficulty: Button::new(canvas.from_center(-11, 28, 22, 3), "Change Difficulty", theme::ORANGE),
            menu: Button::new(canvas.from_center(14, 28, 22, 3), "Back to Menu", theme::BLUE),
        }
    }

    fn handle_event(&self, event: &InputEvent, app: &mut App) {
        match event {
            InputEvent::Click { col, row } => {
                if self.play_again.contains(*col, *row) {
                    app.play_again();
                } else if self.change_difficulty.contains(*col, *row) {
                    app.change_difficulty();
                } else if self.menu.contains(*col, *row) {
                    app.to_menu();
                }
            }
            InputEvent::KeyPress(key) => match key {
                KeyCode::Char('r') => app.play_again(),
                KeyCode::Char('d') => app.change_difficulty(),
                KeyCode::Char('m') | KeyCode::Esc => app.to_menu(),
                _ => {}
            },
            InputEvent::Quit => app.quit(),
        }
    }
}

impl Screen for ResultScreen {
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

        ctx.draw(Scene::Results, |frame, canvas, app| {
            draw_centered(frame, canvas, 6, "Results", theme::title_style());

            let x = (canvas.width() / 2).saturating_sub(28);
            if let Some(payload) = app.result_payload() {
                for (i, (label, value)) in payload.iter().enumerate() {
                    let Some(row) = entry_row(i).filter(|row| *row < canvas.height()) else {
                        break;
                    };
                    let style = if label == "Game" {
                        theme::title_style()
                    } else {
                        theme::text_style()
                    };
                    draw_label(frame, canvas, x, row, &format!("{label}: {value}"), style);
                }
            }

            self.play_again.draw(frame, canvas, ButtonState::Normal);
            self.change_difficulty.draw(frame, canvas, ButtonState::Normal);
            self.menu.draw(frame, canvas, ButtonState::Normal);
        })
    }
}

/// Canvas row of the `index`-th payload line, if it is addressable at all
fn entry_row(index: usize) -> Option<u16> {
    u16::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(ROW_STEP))
        .and_then(|offset| offset.checked_add(FIRST_ROW))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Difficulty, GameMode, ResultPayload};
    use crate::tui::background::BackgroundSet;
    use crate::tui::events::ScriptedEvents;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    #[test]
    fn test_entry_rows_never_wrap() {
        assert_eq!(entry_row(0), Some(FIRST_ROW));
        assert_eq!(entry_row(3), Some(FIRST_ROW + 3 * ROW_STEP));
        assert_eq!(entry_row(40_000), None);
        assert_eq!(entry_row(usize::MAX), None);
    }

    #[test]
    fn test_payload_longer_than_canvas_is_cut_off() {
        let mut app = App::new(Some(4));
        app.to_difficulty(GameMode::HandCricket);
        app.start_game(Difficulty::Easy);
        let payload: ResultPayload = (0..500)
            .map(|i| (format!("Entry {i}"), i.to_string()))
            .collect();
        app.finish_game(payload);

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut events = ScriptedEvents::new();
        let backgrounds = BackgroundSet::solid();
        let canvas = Canvas::new(100, 40, Rect::new(0, 0, 100, 40));
        let mut screen = ResultScreen::new(&canvas);
        let mut ctx = TickContext {
            app: &mut app,
            events: &mut events,
            terminal: &mut terminal,
            backgrounds: &backgrounds,
            canvas,
        };
        screen.tick(&mut ctx).unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| (0..100).map(|x| buffer.get(x, y).symbol()).collect::<String>();
        assert!(row(FIRST_ROW).contains("Entry 0: 0"));
        assert!(row(38).contains("Entry 14: 14"));
        assert!(!row(39).contains("Entry"));
    }
}
