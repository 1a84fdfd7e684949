//! Maze Runner controller: walk from the top-left cell to the exit before the clock runs out.

use crate::app::{App, AppMode, Difficulty, GameMode, ResultPayload};
use crate::controllers::Completion;
use crate::error::AppResult;
use crate::games::maze::{Direction, Maze, MazeRules, MazeRun, StepOutcome};
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
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::time::{Duration, Instant};
use tracing::debug;

const MAZE_TOP: u16 = 7;
/// Terminal columns per maze tile, so tiles look roughly square
const TILE_WIDTH: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Escaped,
    TimeUp,
    GaveUp,
}

impl Ending {
    fn label(self) -> &'static str {
        match self {
            Ending::Escaped => "Escaped",
            Ending::TimeUp => "Time Up",
            Ending::GaveUp => "Gave Up",
        }
    }
}

pub struct MazeRunnerController {
    run: MazeRun,
    difficulty: Difficulty,
    time_limit: Duration,
    started: Instant,
    pub(crate) completion: Completion,
}

impl MazeRunnerController {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        let rules = MazeRules::for_difficulty(difficulty);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        Self {
            run: MazeRun::new(Maze::generate(rules.width, rules.height, &mut rng)),
            difficulty,
            time_limit: rules.time_limit,
            started: Instant::now(),
            completion: Completion::default(),
        }
    }

    fn handle_event(&mut self, event: &InputEvent, app: &mut App, canvas: &Canvas) {
        let dir = match event {
            InputEvent::Click { col, row } => {
                if give_up_button(canvas).contains(*col, *row) {
                    self.end(app, Ending::GaveUp);
                }
                return;
            }
            InputEvent::KeyPress(key) => match key {
                KeyCode::Up | KeyCode::Char('w') => Direction::Up,
                KeyCode::Down | KeyCode::Char('s') => Direction::Down,
                KeyCode::Left | KeyCode::Char('a') => Direction::Left,
                KeyCode::Right | KeyCode::Char('d') => Direction::Right,
                KeyCode::Char('g') => {
                    self.end(app, Ending::GaveUp);
                    return;
                }
                KeyCode::Esc => {
                    app.to_menu();
                    return;
                }
                _ => return,
            },
            InputEvent::Quit => return,
        };

        let outcome = self.run.step(dir);
        debug!(?dir, ?outcome, player = ?self.run.player(), "maze step");
        if outcome == StepOutcome::Escaped {
            self.end(app, Ending::Escaped);
        }
    }

    fn check_clock(&mut self, app: &mut App, elapsed: Duration) {
        if elapsed >= self.time_limit && !self.run.is_escaped() {
            self.end(app, Ending::TimeUp);
        }
    }

    fn end(&mut self, app: &mut App, ending: Ending) {
        let elapsed = self.started.elapsed().min(self.time_limit);
        let payload = ResultPayload::new()
            .with("Game", GameMode::MazeRunner.title())
            .with("Difficulty", self.difficulty.label())
            .with("Moves", self.run.moves().to_string())
            .with("Wall Bumps", self.run.bumps().to_string())
            .with("Time", format!("{:.1}s", elapsed.as_secs_f32()))
            .with("Result", ending.label());
        self.completion.report(app, payload);
    }

    fn tile_lines(&self) -> Vec<Line<'static>> {
        let maze = self.run.maze();
        let (px, py) = self.run.player();
        let (ex, ey) = maze.exit();
        let block = "█".repeat(TILE_WIDTH as usize);
        let floor = " ".repeat(TILE_WIDTH as usize);

        maze.tiles()
            .into_iter()
            .enumerate()
            .map(|(ty, row)| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .enumerate()
                    .map(|(tx, wall)| {
                        if (tx, ty) == (px * 2 + 1, py * 2 + 1) {
                            Span::styled(block.clone(), Style::default().fg(theme::GREEN))
                        } else if (tx, ty) == (ex * 2 + 1, ey * 2 + 1) {
                            Span::styled(block.clone(), Style::default().fg(theme::YELLOW))
                        } else if wall {
                            Span::styled(block.clone(), Style::default().fg(theme::GRAY))
                        } else {
                            Span::raw(floor.clone())
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Screen for MazeRunnerController {
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
        self.check_clock(ctx.app, self.started.elapsed());

        let remaining = self.time_limit.saturating_sub(self.started.elapsed());
        ctx.draw(Scene::Maze, |frame, canvas, _app| {
            draw_centered(
                frame,
                canvas,
                2,
                &format!("Maze Runner ({})", self.difficulty),
                theme::title_style(),
            );
            draw_centered(
                frame,
                canvas,
                4,
                &format!(
                    "Time left: {}s   Moves: {}   Bumps: {}",
                    remaining.as_secs(),
                    self.run.moves(),
                    self.run.bumps()
                ),
                theme::text_style(),
            );

            let lines = self.tile_lines();
            let width = lines.first().map_or(0, |line| line.width() as u16);
            let area = canvas.place(canvas.centered(width, MAZE_TOP, lines.len() as u16));
            if !area.is_empty() {
                frame.render_widget(Paragraph::new(lines), area);
            }

            draw_centered(
                frame,
                canvas,
                canvas.height().saturating_sub(3),
                "Arrow keys or WASD to move, Esc for menu",
                theme::subtitle_style(),
            );
            give_up_button(canvas).draw(frame, canvas, ButtonState::Normal);
        })
    }
}

fn give_up_button(canvas: &Canvas) -> Button {
    Button::new(Rect::new(canvas.width().saturating_sub(18), 1, 16, 3), "Give Up", theme::RED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(100, 40, Rect::new(0, 0, 100, 40))
    }

    fn in_game(difficulty: Difficulty) -> App {
        let mut app = App::new(Some(8));
        app.to_difficulty(GameMode::MazeRunner);
        app.start_game(difficulty);
        app
    }

    #[test]
    fn test_tiles_fit_canvas_on_hard() {
        let controller = MazeRunnerController::new(Difficulty::Hard, 1);
        let lines = controller.tile_lines();
        assert_eq!(lines.len(), 19);
        assert!(lines.iter().all(|line| line.width() == 66));
        assert!(MAZE_TOP + lines.len() as u16 <= canvas().height() - 3);
    }

    #[test]
    fn test_walking_into_wall_counts_bump() {
        let mut app = in_game(Difficulty::Easy);
        let mut controller = MazeRunnerController::new(Difficulty::Easy, 1);
        controller.handle_event(&InputEvent::KeyPress(KeyCode::Up), &mut app, &canvas());
        assert_eq!(controller.run.bumps(), 1);
        assert_eq!(controller.run.player(), (0, 0));
        assert_eq!(app.mode(), AppMode::InGame);
    }

    #[test]
    fn test_give_up_reports_once() {
        let mut app = in_game(Difficulty::Medium);
        let mut controller = MazeRunnerController::new(Difficulty::Medium, 1);
        let button = give_up_button(&canvas());
        let click = InputEvent::Click {
            col: button.rect.x + 2,
            row: button.rect.y + 1,
        };
        controller.handle_event(&click, &mut app, &canvas());
        assert_eq!(app.mode(), AppMode::Result);
        assert_eq!(app.result_payload().and_then(|p| p.get("Result")), Some("Gave Up"));

        app.play_again();
        controller.handle_event(&InputEvent::KeyPress(KeyCode::Char('g')), &mut app, &canvas());
        assert_eq!(app.mode(), AppMode::InGame);
    }

    #[test]
    fn test_clock_expiry_is_time_up() {
        let mut app = in_game(Difficulty::Hard);
        let mut controller = MazeRunnerController::new(Difficulty::Hard, 1);
        controller.check_clock(&mut app, Duration::from_secs(59));
        assert_eq!(app.mode(), AppMode::InGame);
        controller.check_clock(&mut app, Duration::from_secs(60));
        let payload = app.result_payload().unwrap();
        assert_eq!(payload.get("Game"), Some("Maze Runner"));
        assert_eq!(payload.get("Result"), Some("Time Up"));
    }
}
