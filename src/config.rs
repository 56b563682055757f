//! Startup configuration for the editor window and its initial scene.
//!
//! Nothing is read from the environment or the command line; every value
//! comes from the `DEFAULT_*` constants below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use tiny_skia::Color;

pub const DEFAULT_TITLE: &str = "Animusic Editor";
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;
pub const DEFAULT_BACKGROUND_RGB: (u8, u8, u8) = (50, 50, 50);
pub const DEFAULT_CANVAS_WIDTH: f64 = canvas::consts::DEFAULT_CANVAS_WIDTH;
pub const DEFAULT_CANVAS_HEIGHT: f64 = canvas::consts::DEFAULT_CANVAS_HEIGHT;
pub const DEFAULT_SEED_SIZE: u32 = 200;
pub const DEFAULT_SEED_POS: (f64, f64) = (500.0, 300.0);

/// The item placed on the canvas at launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedItem {
    pub width: u32,
    pub height: u32,
    pub rgb: (u8, u8, u8),
    /// Canvas-local position of the item's top-left corner.
    pub x: f64,
    pub y: f64,
}

impl SeedItem {
    #[must_use]
    pub fn color(&self) -> Color {
        let (r, g, b) = self.rgb;
        Color::from_rgba8(r, g, b, 255)
    }
}

impl Default for SeedItem {
    fn default() -> Self {
        Self {
            width: DEFAULT_SEED_SIZE,
            height: DEFAULT_SEED_SIZE,
            rgb: (255, 0, 0),
            x: DEFAULT_SEED_POS.0,
            y: DEFAULT_SEED_POS.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub background_rgb: (u8, u8, u8),
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub seed: SeedItem,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            background_rgb: DEFAULT_BACKGROUND_RGB,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            seed: SeedItem::default(),
        }
    }
}

impl EditorConfig {
    /// Backdrop drawn around the canvas.
    #[must_use]
    pub fn background(&self) -> Color {
        let (r, g, b) = self.background_rgb;
        Color::from_rgba8(r, g, b, 255)
    }
}
