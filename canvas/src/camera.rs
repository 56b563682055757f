#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Sub};

use crate::geom::Transform;

/// A point in either screen or scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The view transform: scene coordinates to window pixels.
///
/// `pan_x` / `pan_y` are in window pixels.
/// `zoom` is a scale factor (1.0 = no zoom). It is never clamped.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (pixels) to scene coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a scene-space point to screen coordinates (pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Multiply the zoom by `factor`, keeping the scene point under `anchor` fixed on screen.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        let world = self.screen_to_world(anchor);
        self.zoom *= factor;
        self.pan_x = anchor.x - world.x * self.zoom;
        self.pan_y = anchor.y - world.y * self.zoom;
    }

    /// Translate the view by a scene-space delta.
    ///
    /// A scene point `p` is drawn where `p + delta` used to be, whatever the zoom.
    pub fn translate_world(&mut self, delta: Point) {
        self.pan_x += delta.x * self.zoom;
        self.pan_y += delta.y * self.zoom;
    }

    /// Pan so that `world` sits at `screen`, leaving zoom alone.
    pub fn look_at(&mut self, world: Point, screen: Point) {
        self.pan_x = screen.x - world.x * self.zoom;
        self.pan_y = screen.y - world.y * self.zoom;
    }

    /// Scene-to-screen mapping as a transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform { scale: self.zoom, dx: self.pan_x, dy: self.pan_y }
    }
}
