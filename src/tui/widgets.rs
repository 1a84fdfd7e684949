//! # Widgets
//!
//! Drawing helpers shared by the screens: clickable buttons and text placed in
//! canvas coordinates.

use crate::tui::canvas::Canvas;
use crate::tui::theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// How a button is highlighted when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Selected,
    Disabled,
}

/// A labelled rectangle that reacts to left clicks
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub bg: Color,
    pub fg: Color,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, bg: Color) -> Self {
        Self {
            rect,
            label: label.into(),
            bg,
            fg: theme::WHITE,
        }
    }

    /// Hit test in canvas coordinates
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.rect.x
            && col < self.rect.x.saturating_add(self.rect.width)
            && row >= self.rect.y
            && row < self.rect.y.saturating_add(self.rect.height)
    }

    pub fn draw(&self, frame: &mut Frame, canvas: &Canvas, state: ButtonState) {
        let area = canvas.place(self.rect);
        if area.is_empty() {
            return;
        }

        let (bg, border) = match state {
            ButtonState::Normal => (self.bg, Style::default().fg(theme::BLACK)),
            ButtonState::Selected => (
                theme::PURPLE,
                Style::default().fg(theme::WHITE).add_modifier(Modifier::BOLD),
            ),
            ButtonState::Disabled => (theme::GRAY, Style::default().fg(theme::BLACK)),
        };
        let border_type = if state == ButtonState::Selected {
            BorderType::Thick
        } else {
            BorderType::Plain
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border.bg(bg));
        let label = Paragraph::new(self.label.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.fg).bg(bg).add_modifier(Modifier::BOLD))
            .block(block);
        frame.render_widget(label, area);
    }
}

/// Draws a single line of text centred across the canvas at `row`
pub fn draw_centered(frame: &mut Frame, canvas: &Canvas, row: u16, text: &str, style: Style) {
    let area = canvas.place(Rect::new(0, row, canvas.width(), 1));
    if !area.is_empty() {
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center).style(style), area);
    }
}

/// Draws text with its left edge at canvas position (`x`, `y`)
pub fn draw_label(frame: &mut Frame, canvas: &Canvas, x: u16, y: u16, text: &str, style: Style) {
    let width = canvas.width().saturating_sub(x);
    let area = canvas.place(Rect::new(x, y, width, 1));
    if !area.is_empty() {
        frame.render_widget(Paragraph::new(text).style(style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_covers_rect_edges() {
        let button = Button::new(Rect::new(10, 5, 4, 3), "Go", theme::BLUE);
        assert!(button.contains(10, 5));
        assert!(button.contains(13, 7));
        assert!(!button.contains(14, 7));
        assert!(!button.contains(13, 8));
        assert!(!button.contains(9, 5));
    }
}
