//! # Backgrounds
//!
//! Each screen paints a backdrop before anything else. Two strategies exist:
//! flat colours, or images loaded once at startup and scaled to the canvas.
//! Images are drawn with upper half-block glyphs so every terminal cell shows
//! two vertically stacked pixels.

use crate::config::{BackgroundStyle, Config};
use crate::error::{AppError, AppResult};
use crate::tui::canvas::Canvas;
use crate::tui::theme;
use image::imageops::FilterType;
use image::RgbImage;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

const HALF_BLOCK: char = '▀';

/// Which backdrop a screen wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Menu,
    Cricket,
    Maze,
    Results,
}

impl Scene {
    pub const ALL: [Scene; 4] = [Scene::Menu, Scene::Cricket, Scene::Maze, Scene::Results];

    /// Asset file read when image backgrounds are enabled
    pub fn file_name(self) -> &'static str {
        match self {
            Scene::Menu => "bg.png",
            Scene::Cricket => "cricket.png",
            Scene::Maze => "maze.png",
            Scene::Results => "results.png",
        }
    }

    fn solid_color(self) -> Color {
        match self {
            Scene::Menu | Scene::Results => theme::DARK,
            Scene::Cricket => theme::CRICKET_BG,
            Scene::Maze => theme::MAZE_BG,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Background {
    Solid(Color),
    /// Pre-scaled to `canvas_width x canvas_height * 2` pixels
    Image(Arc<RgbImage>),
}

impl Background {
    /// Paints the backdrop over the visible part of the canvas
    pub fn paint(&self, buf: &mut Buffer, canvas: &Canvas) {
        let area = canvas.place(canvas.bounds()).intersection(buf.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let Some((local_x, local_y)) = canvas.to_local(x, y) else {
                    continue;
                };
                let cell = buf.get_mut(x, y);
                match self {
                    Background::Solid(color) => {
                        cell.set_char(' ').set_bg(*color);
                    }
                    Background::Image(pixels) => {
                        let px = u32::from(local_x);
                        let py = u32::from(local_y) * 2;
                        let top = pixel_color(pixels, px, py);
                        let bottom = pixel_color(pixels, px, py + 1);
                        cell.set_char(HALF_BLOCK).set_fg(top).set_bg(bottom);
                    }
                }
            }
        }
    }
}

fn pixel_color(pixels: &RgbImage, x: u32, y: u32) -> Color {
    if x < pixels.width() && y < pixels.height() {
        let [r, g, b] = pixels.get_pixel(x, y).0;
        Color::Rgb(r, g, b)
    } else {
        theme::BLACK
    }
}

/// One backdrop per scene
#[derive(Debug, Clone)]
pub struct BackgroundSet {
    menu: Background,
    cricket: Background,
    maze: Background,
    results: Background,
}

impl BackgroundSet {
    pub fn solid() -> Self {
        Self {
            menu: Background::Solid(Scene::Menu.solid_color()),
            cricket: Background::Solid(Scene::Cricket.solid_color()),
            maze: Background::Solid(Scene::Maze.solid_color()),
            results: Background::Solid(Scene::Results.solid_color()),
        }
    }

    /// Loads all four scene images; any missing or unreadable file is an error
    pub fn load_images(dir: &Path, width: u16, height: u16) -> AppResult<Self> {
        let load = |scene: Scene| load_scaled(&dir.join(scene.file_name()), width, height);
        Ok(Self {
            menu: load(Scene::Menu)?,
            cricket: load(Scene::Cricket)?,
            maze: load(Scene::Maze)?,
            results: load(Scene::Results)?,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        match config.backgrounds {
            BackgroundStyle::Solid => Ok(Self::solid()),
            BackgroundStyle::Images => {
                Self::load_images(&config.assets_dir, config.canvas_width, config.canvas_height)
            }
        }
    }

    pub fn get(&self, scene: Scene) -> &Background {
        match scene {
            Scene::Menu => &self.menu,
            Scene::Cricket => &self.cricket,
            Scene::Maze => &self.maze,
            Scene::Results => &self.results,
        }
    }
}

fn load_scaled(path: &Path, width: u16, height: u16) -> AppResult<Background> {
    let decoded = image::open(path).map_err(|source| {
        error!(path = %path.display(), %source, "background image unavailable");
        AppError::Asset {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let scaled = decoded
        .resize_exact(u32::from(width), u32::from(height) * 2, FilterType::Triangle)
        .to_rgb8();
    info!(path = %path.display(), width, height, "loaded background image");
    Ok(Background::Image(Arc::new(scaled)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use ratatui::layout::Rect;

    fn write_scene_images(dir: &Path, skip: Option<Scene>) {
        for scene in Scene::ALL {
            if Some(scene) == skip {
                continue;
            }
            RgbImage::from_pixel(8, 8, Rgb([200, 10, 10]))
                .save(dir.join(scene.file_name()))
                .unwrap();
        }
    }

    #[test]
    fn test_loads_all_four_images() {
        let dir = tempfile::tempdir().unwrap();
        write_scene_images(dir.path(), None);
        let set = BackgroundSet::load_images(dir.path(), 20, 10).unwrap();
        for scene in Scene::ALL {
            match set.get(scene) {
                Background::Image(pixels) => assert_eq!(pixels.dimensions(), (20, 20)),
                Background::Solid(_) => panic!("expected image background for {scene:?}"),
            }
        }
    }

    #[test]
    fn test_missing_image_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_scene_images(dir.path(), Some(Scene::Maze));
        match BackgroundSet::load_images(dir.path(), 20, 10) {
            Err(AppError::Asset { path, .. }) => assert!(path.ends_with("maze.png")),
            other => panic!("expected asset error, got {other:?}"),
        }
    }

    #[test]
    fn test_solid_paint_fills_canvas_only() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 6));
        let canvas = Canvas::new(10, 4, buf.area);
        BackgroundSet::solid().get(Scene::Cricket).paint(&mut buf, &canvas);
        assert_eq!(buf.get(1, 1).bg, theme::CRICKET_BG);
        assert_eq!(buf.get(10, 4).bg, theme::CRICKET_BG);
        assert_eq!(buf.get(0, 0).bg, Color::Reset);
        assert_eq!(buf.get(11, 5).bg, Color::Reset);
    }

    #[test]
    fn test_image_paint_uses_half_blocks() {
        let mut pixels = RgbImage::from_pixel(4, 4, Rgb([0, 0, 255]));
        pixels.put_pixel(0, 0, Rgb([255, 0, 0]));
        let background = Background::Image(Arc::new(pixels));
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        let canvas = Canvas::new(4, 2, buf.area);
        background.paint(&mut buf, &canvas);
        let cell = buf.get(0, 0);
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }
}
