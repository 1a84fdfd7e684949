//! Hand Cricket controller: six number buttons, a scoreboard and the last ball.

use crate::app::{App, AppMode, Difficulty, GameMode, ResultPayload};
use crate::controllers::Completion;
use crate::error::AppResult;
use crate::games::hand_cricket::{
    BallOutcome, CricketRules, HandCricketMatch, Innings, MAX_PICK, MIN_PICK,
};
use crate::screens::{Screen, TickContext};
use crate::tui::background::Scene;
use crate::tui::canvas::Canvas;
use crate::tui::events::InputEvent;
use crate::tui::theme;
use crate::tui::widgets::{draw_centered, Button, ButtonState};
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use tracing::debug;

const PICK_ROW: u16 = 26;
const PICK_WIDTH: u16 = 8;
const PICK_GAP: u16 = 2;

pub struct HandCricketController {
    game: HandCricketMatch<Xoshiro256PlusPlus>,
    difficulty: Difficulty,
    pub(crate) completion: Completion,
}

impl HandCricketController {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            game: HandCricketMatch::new(
                CricketRules::for_difficulty(difficulty),
                Xoshiro256PlusPlus::seed_from_u64(seed),
            ),
            difficulty,
            completion: Completion::default(),
        }
    }

    fn handle_event(&mut self, event: &InputEvent, app: &mut App, canvas: &Canvas) {
        let pick = match event {
            InputEvent::Click { col, row } => {
                if quit_button(canvas).contains(*col, *row) {
                    app.to_menu();
                    return;
                }
                pick_buttons(canvas)
                    .iter()
                    .zip(MIN_PICK..=MAX_PICK)
                    .find(|(button, _)| button.contains(*col, *row))
                    .map(|(_, pick)| pick)
            }
            InputEvent::KeyPress(KeyCode::Esc) => {
                app.to_menu();
                return;
            }
            InputEvent::KeyPress(KeyCode::Char(c)) => c
                .to_digit(10)
                .and_then(|digit| u8::try_from(digit).ok())
                .filter(|digit| (MIN_PICK..=MAX_PICK).contains(digit)),
            _ => None,
        };

        let Some(pick) = pick else {
            return;
        };
        match self.game.play(pick) {
            Ok(ball) => debug!(?ball, "ball played"),
            Err(err) => debug!(%err, "pick ignored"),
        }
        if self.game.is_over() {
            let payload = self.payload();
            self.completion.report(app, payload);
        }
    }

    fn payload(&self) -> ResultPayload {
        let result = self.game.result().map_or("Unfinished", |result| result.label());
        let innings = match self.game.innings() {
            Innings::PlayerBatting => "1st",
            Innings::CpuBatting => "2nd",
        };
        ResultPayload::new()
            .with("Game", GameMode::HandCricket.title())
            .with("Difficulty", self.difficulty.label())
            .with("Your Score", self.game.player_score().to_string())
            .with("CPU Score", self.game.cpu_score().to_string())
            .with("Balls", self.game.balls_total().to_string())
            .with("Innings", innings)
            .with("Result", result)
    }
}

impl Screen for HandCricketController {
    fn tick<B: Backend>(&mut self, ctx: &mut TickContext<'_, B>) -> AppResult<()> {
        let canvas = ctx.canvas;
        for event in ctx.drain_events()? {
            self.handle_event(&event, ctx.app, &canvas);
            // once the game leaves play the rest of the batch is dropped
            if ctx.app.should_quit || ctx.app.mode() != AppMode::InGame {
                break;
            }
        }
        if ctx.app.should_quit || ctx.app.mode() != AppMode::InGame {
            return Ok(());
        }

        ctx.draw(Scene::Cricket, |frame, canvas, _app| {
            draw_centered(frame, canvas, 3, "Hand Cricket", theme::title_style());
            draw_centered(frame, canvas, 5, &format!("Difficulty: {}", self.difficulty), theme::subtitle_style());

            let status = match self.game.target() {
                None => "You are batting. Pick a number!".to_string(),
                Some(target) => format!("CPU is batting and needs {target}. Bowl!"),
            };
            draw_centered(frame, canvas, 9, &status, theme::title_style());
            draw_centered(
                frame,
                canvas,
                12,
                &format!("You: {}   CPU: {}", self.game.player_score(), self.game.cpu_score()),
                theme::text_style(),
            );
            draw_centered(
                frame,
                canvas,
                14,
                &format!("Balls left this innings: {}", self.game.balls_left()),
                theme::subtitle_style(),
            );
            if let Some(ball) = self.game.last_ball() {
                let verdict = match ball.outcome {
                    BallOutcome::Out => "OUT!".to_string(),
                    BallOutcome::Runs(runs) => format!("{runs} run(s)"),
                };
                draw_centered(
                    frame,
                    canvas,
                    18,
                    &format!("You showed {}, CPU showed {}: {verdict}", ball.player_pick, ball.cpu_pick),
                    theme::text_style(),
                );
            }

            for button in pick_buttons(canvas) {
                button.draw(frame, canvas, ButtonState::Normal);
            }
            quit_button(canvas).draw(frame, canvas, ButtonState::Normal);
        })
    }
}

fn pick_buttons(canvas: &Canvas) -> Vec<Button> {
    let count = u16::from(MAX_PICK - MIN_PICK + 1);
    let total = count * PICK_WIDTH + (count - 1) * PICK_GAP;
    let left = canvas.width().saturating_sub(total) / 2;
    (MIN_PICK..=MAX_PICK)
        .enumerate()
        .map(|(i, pick)| {
            let x = left + i as u16 * (PICK_WIDTH + PICK_GAP);
            Button::new(Rect::new(x, PICK_ROW, PICK_WIDTH, 3), pick.to_string(), theme::BLUE)
        })
        .collect()
}

fn quit_button(canvas: &Canvas) -> Button {
    Button::new(Rect::new(canvas.width().saturating_sub(16), 1, 14, 3), "Quit", theme::GRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(100, 40, Rect::new(0, 0, 100, 40))
    }

    fn in_game() -> App {
        let mut app = App::new(Some(5));
        app.to_difficulty(GameMode::HandCricket);
        app.start_game(Difficulty::Easy);
        app
    }

    #[test]
    fn test_pick_buttons_fit_canvas_in_order() {
        let buttons = pick_buttons(&canvas());
        assert_eq!(buttons.len(), 6);
        assert_eq!(buttons[0].label, "1");
        assert_eq!(buttons[5].label, "6");
        assert!(buttons[5].rect.right() <= 100);
    }

    #[test]
    fn test_number_keys_play_balls_until_reported() {
        let mut app = in_game();
        let mut controller = HandCricketController::new(Difficulty::Easy, 5);
        let mut presses = 0;
        while app.mode() == AppMode::InGame {
            let key = char::from(b'1' + (presses % 6) as u8);
            controller.handle_event(&InputEvent::KeyPress(KeyCode::Char(key)), &mut app, &canvas());
            presses += 1;
            assert!(presses <= 24);
        }
        assert_eq!(app.mode(), AppMode::Result);
        let payload = app.result_payload().unwrap();
        assert_eq!(payload.get("Game"), Some("Hand Cricket"));
        assert_eq!(payload.get("Difficulty"), Some("Easy"));
        assert!(matches!(payload.get("Result"), Some("Win" | "Loss" | "Tie")));
    }

    #[test]
    fn test_clicking_a_pick_button_plays_a_ball() {
        let mut app = in_game();
        let mut controller = HandCricketController::new(Difficulty::Easy, 5);
        let button = &pick_buttons(&canvas())[3];
        let click = InputEvent::Click {
            col: button.rect.x + 1,
            row: button.rect.y + 1,
        };
        controller.handle_event(&click, &mut app, &canvas());
        assert_eq!(controller.game.balls_total(), 1);
        assert_eq!(controller.game.last_ball().map(|b| b.player_pick), Some(4));
    }

    #[test]
    fn test_out_of_range_keys_are_ignored() {
        let mut app = in_game();
        let mut controller = HandCricketController::new(Difficulty::Easy, 5);
        for key in ['0', '7', 'x'] {
            controller.handle_event(&InputEvent::KeyPress(KeyCode::Char(key)), &mut app, &canvas());
        }
        assert_eq!(controller.game.balls_total(), 0);
        assert_eq!(app.mode(), AppMode::InGame);
    }

    #[test]
    fn test_escape_abandons_to_menu() {
        let mut app = in_game();
        let mut controller = HandCricketController::new(Difficulty::Easy, 5);
        controller.handle_event(&InputEvent::KeyPress(KeyCode::Esc), &mut app, &canvas());
        assert_eq!(app.mode(), AppMode::Menu);
        assert!(!controller.completion.reported());
    }
}
