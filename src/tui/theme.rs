//! Colour palette shared by every screen.

use ratatui::style::{Color, Modifier, Style};

pub const WHITE: Color = Color::Rgb(255, 255, 255);
pub const BLACK: Color = Color::Rgb(0, 0, 0);
pub const GRAY: Color = Color::Rgb(200, 200, 200);
pub const LIGHT_GRAY: Color = Color::Rgb(220, 220, 220);
pub const DARK: Color = Color::Rgb(40, 40, 40);
pub const BLUE: Color = Color::Rgb(66, 135, 245);
pub const GREEN: Color = Color::Rgb(46, 204, 113);
pub const RED: Color = Color::Rgb(231, 76, 60);
pub const YELLOW: Color = Color::Rgb(241, 196, 15);
pub const ORANGE: Color = Color::Rgb(243, 156, 18);
pub const PURPLE: Color = Color::Rgb(155, 89, 182);
/// Hand cricket pitch backdrop
pub const CRICKET_BG: Color = Color::Rgb(15, 30, 45);
/// Maze backdrop
pub const MAZE_BG: Color = Color::Rgb(10, 10, 20);

pub fn title_style() -> Style {
    Style::default().fg(WHITE).add_modifier(Modifier::BOLD)
}

pub fn subtitle_style() -> Style {
    Style::default().fg(GRAY)
}

pub fn text_style() -> Style {
    Style::default().fg(LIGHT_GRAY)
}
