//! # Canvas
//!
//! Screens lay themselves out on a fixed-size canvas, independent of the real
//! terminal size. The canvas is centred in the terminal and clipped to it, so
//! layout code never has to care about small or oversized terminals.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    /// Where the canvas origin lands in the terminal (may hang off the edge)
    origin_x: u16,
    origin_y: u16,
    /// Visible part of the terminal
    viewport: Rect,
}

impl Canvas {
    pub fn new(width: u16, height: u16, terminal: Rect) -> Self {
        let origin_x = terminal.x + terminal.width.saturating_sub(width) / 2;
        let origin_y = terminal.y + terminal.height.saturating_sub(height) / 2;
        Self {
            width,
            height,
            origin_x,
            origin_y,
            viewport: terminal,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The whole canvas in canvas coordinates
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Maps a canvas-space rectangle to the terminal, clipped to what is visible
    pub fn place(&self, local: Rect) -> Rect {
        let local = local.intersection(self.bounds());
        let placed = Rect::new(
            self.origin_x.saturating_add(local.x),
            self.origin_y.saturating_add(local.y),
            local.width,
            local.height,
        );
        placed.intersection(self.viewport)
    }

    /// Converts a terminal position to canvas coordinates
    pub fn to_local(&self, col: u16, row: u16) -> Option<(u16, u16)> {
        let x = col.checked_sub(self.origin_x)?;
        let y = row.checked_sub(self.origin_y)?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Rectangle of `width` x `height` horizontally centred at row `y`
    pub fn centered(&self, width: u16, y: u16, height: u16) -> Rect {
        Rect::new(self.width.saturating_sub(width) / 2, y, width, height)
    }

    /// Rectangle whose left edge sits `offset` columns from the horizontal centre
    pub fn from_center(&self, offset: i32, y: u16, width: u16, height: u16) -> Rect {
        let x = (i32::from(self.width / 2) + offset).clamp(0, i32::from(self.width)) as u16;
        Rect::new(x, y, width, height)
    }
}
