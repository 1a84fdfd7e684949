//! # Terminal User Interface Module
//!
//! The application shell: it owns the terminal, the input source, the state
//! container and one instance of every screen, and drives them from a
//! fixed-rate loop.
//!
//! ## Key Components
//! - **Terminal Management**: raw mode, alternate screen and mouse capture
//! - **Event Loop**: one [`Shell::tick`] per frame, capped by [`FrameClock`]
//! - **Dispatch**: the current [`AppMode`] picks which screen or controller ticks
//! - **Self-healing**: a game mode without a running controller falls back to the menu

use crate::app::{App, AppMode};
use crate::config::Config;
use crate::error::AppResult;
use crate::screens::{DifficultyScreen, MenuScreen, ResultScreen, Screen, TickContext};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Write};
use std::panic;
use tracing::{error, info, warn};

pub mod background;
pub mod canvas;
pub mod clock;
pub mod events;
pub mod theme;
pub mod widgets;

use background::BackgroundSet;
use canvas::Canvas;
use clock::FrameClock;
use events::{CrosstermEvents, EventSource};

/// The application shell
pub struct Shell<B: Backend, E: EventSource> {
    terminal: Terminal<B>,
    events: E,
    app: App,
    backgrounds: BackgroundSet,
    clock: FrameClock,
    canvas_size: (u16, u16),
    menu: MenuScreen,
    difficulty: DifficultyScreen,
    result: ResultScreen,
}

impl<B: Backend, E: EventSource> Shell<B, E> {
    pub fn new(terminal: Terminal<B>, events: E, config: &Config, backgrounds: BackgroundSet) -> Self {
        let layout = Canvas::new(
            config.canvas_width,
            config.canvas_height,
            ratatui::layout::Rect::new(0, 0, config.canvas_width, config.canvas_height),
        );
        Self {
            terminal,
            events,
            app: App::new(config.seed),
            backgrounds,
            clock: FrameClock::new(config.fps),
            canvas_size: (config.canvas_width, config.canvas_height),
            menu: MenuScreen::new(&layout),
            difficulty: DifficultyScreen::new(&layout),
            result: ResultScreen::new(&layout),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    /// Runs until the user quits
    pub fn run(&mut self) -> AppResult<()> {
        info!("entering main loop");
        while !self.app.should_quit {
            self.tick()?;
        }
        info!("main loop finished");
        Ok(())
    }

    /// One frame: dispatch to the current screen, then wait out the frame
    pub fn tick(&mut self) -> AppResult<()> {
        let canvas = Canvas::new(self.canvas_size.0, self.canvas_size.1, self.terminal.size()?);
        let mut ctx = TickContext {
            app: &mut self.app,
            events: &mut self.events,
            terminal: &mut self.terminal,
            backgrounds: &self.backgrounds,
            canvas,
        };

        match ctx.app.mode() {
            AppMode::Menu => self.menu.tick(&mut ctx)?,
            AppMode::Difficulty => self.difficulty.tick(&mut ctx)?,
            AppMode::Result => self.result.tick(&mut ctx)?,
            AppMode::InGame => match ctx.app.take_controller() {
                Some(mut controller) => {
                    let outcome = controller.tick(&mut ctx);
                    ctx.app.restore_controller(controller);
                    outcome?;
                }
                None => {
                    warn!("in game without a running controller, returning to menu");
                    ctx.app.to_menu();
                }
            },
        }

        if !self.app.should_quit {
            self.clock.wait();
        }
        Ok(())
    }
}

/// Main entry point for the terminal user interface
///
/// Sets the terminal up, runs the loop and always restores the terminal,
/// even when the loop fails.
pub fn run(config: &Config, backgrounds: BackgroundSet) -> AppResult<()> {
    let terminal = init_terminal()?;
    install_panic_hook();
    let mut shell = Shell::new(terminal, CrosstermEvents, config, backgrounds);
    let outcome = shell.run();
    restore_terminal(&mut shell.terminal)?;
    outcome
}

/// Initializes the terminal for raw mode operation
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    enter_screen(io::stdout(), disable_raw_mode)
}

/// Switches `out` to the alternate screen; on failure raw mode is undone
/// before the error is returned
fn enter_screen<W: Write>(
    mut out: W,
    undo_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<Terminal<CrosstermBackend<W>>> {
    let entered = execute!(out, EnterAlternateScreen, EnableMouseCapture, crossterm::cursor::Hide)
        .and_then(|()| Terminal::new(CrosstermBackend::new(out)));
    if let Err(err) = &entered {
        error!(%err, "terminal setup failed");
        if let Err(undo_err) = undo_raw() {
            error!(%undo_err, "could not leave raw mode");
        }
    }
    entered
}

/// Puts the terminal back before the default hook prints the panic
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        // nothing left to report a failure to
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, crossterm::cursor::Show);
        default_hook(info);
    }));
}

/// Restores the terminal to normal operation mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()
}
