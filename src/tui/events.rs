//! # Input Events
//!
//! Terminal input is reduced to the few events the screens care about. The
//! live source polls crossterm without blocking; tests feed a scripted queue.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Input events delivered to screens and controllers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Left click; terminal coordinates from the source, canvas coordinates once drained
    Click { col: u16, row: u16 },
    KeyPress(KeyCode),
    /// The user closed the application (Ctrl+C)
    Quit,
}

/// Anything that can hand over the input that arrived since the last tick
pub trait EventSource {
    fn drain(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Reads pending terminal events without waiting for new ones
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn drain(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(input) = translate(event::read()?) {
                events.push(input);
            }
        }
        Ok(events)
    }
}

fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                Some(InputEvent::Quit)
            } else {
                Some(InputEvent::KeyPress(key.code))
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
                col: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Event source backed by a queue of per-tick batches
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues events to be delivered together on one future tick
    pub fn push_tick(&mut self, events: Vec<InputEvent>) {
        self.batches.push_back(events);
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    fn drain(&mut self) -> io::Result<Vec<InputEvent>> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}
