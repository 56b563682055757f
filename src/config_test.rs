#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_title() {
    assert_eq!(EditorConfig::default().title, "Animusic Editor");
}

#[test]
fn default_canvas_is_full_hd() {
    let config = EditorConfig::default();
    assert_eq!(config.canvas_width, 1920.0);
    assert_eq!(config.canvas_height, 1080.0);
}

#[test]
fn default_seed_is_red_square() {
    let seed = EditorConfig::default().seed;
    assert_eq!((seed.width, seed.height), (200, 200));
    assert_eq!((seed.x, seed.y), (500.0, 300.0));
    assert_eq!(seed.color(), Color::from_rgba8(255, 0, 0, 255));
}

#[test]
fn default_background_is_dark_gray() {
    assert_eq!(EditorConfig::default().background(), Color::from_rgba8(50, 50, 50, 255));
}

#[test]
fn window_is_nonzero() {
    let config = EditorConfig::default();
    assert!(config.window_width > 0);
    assert!(config.window_height > 0);
}
