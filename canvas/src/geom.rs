//! Rectangles and the scale+translate transform shared by the view and items.
//!
//! Every transform in the scene is a uniform scale followed by a translation:
//! items carry pure offsets relative to their parent, and the view adds zoom.
//! Rects are axis-aligned, so mapping one through a transform and taking the
//! bounding box is exact.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::camera::Point;

/// Width and height in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A rect of `size` anchored at the origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// The smallest rect containing both points.
    #[must_use]
    pub fn bounding(a: Point, b: Point) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self::new(left, top, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True when the rect covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Copy of this rect moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Point) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Copy of this rect grown by `amount` on every side.
    #[must_use]
    pub fn grown(&self, amount: f64) -> Self {
        Self::new(self.x - amount, self.y - amount, self.width + 2.0 * amount, self.height + 2.0 * amount)
    }

    /// Whether `pt` lies inside or on the edge of this rect.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// Overlap of two rects, or `None` when they share no area.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let rect = Rect::new(left, top, right - left, bottom - top);
        if rect.is_empty() { None } else { Some(rect) }
    }

    /// Lossy conversion for the rasterizer. `None` for an empty or non-finite rect.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_skia(&self) -> Option<tiny_skia::Rect> {
        if self.is_empty() {
            return None;
        }
        tiny_skia::Rect::from_xywh(self.x as f32, self.y as f32, self.width as f32, self.height as f32)
    }
}

/// The device area covered by `frame`, in pixels.
#[must_use]
pub fn frame_rect(frame: &tiny_skia::Pixmap) -> Rect {
    Rect::new(0.0, 0.0, f64::from(frame.width()), f64::from(frame.height()))
}

/// Uniform scale followed by translation: `p' = p * scale + (dx, dy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[must_use]
    pub fn identity() -> Self {
        Self { scale: 1.0, dx: 0.0, dy: 0.0 }
    }

    #[must_use]
    pub fn translation(offset: Point) -> Self {
        Self { scale: 1.0, dx: offset.x, dy: offset.y }
    }

    /// Compose: apply `self` first, then `outer`.
    #[must_use]
    pub fn then(&self, outer: &Transform) -> Self {
        Self {
            scale: self.scale * outer.scale,
            dx: self.dx * outer.scale + outer.dx,
            dy: self.dy * outer.scale + outer.dy,
        }
    }

    /// The transform undoing this one. `None` when the scale has collapsed to zero.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return None;
        }
        let inv = 1.0 / self.scale;
        Some(Self { scale: inv, dx: -self.dx * inv, dy: -self.dy * inv })
    }

    #[must_use]
    pub fn map_point(&self, pt: Point) -> Point {
        Point::new(pt.x * self.scale + self.dx, pt.y * self.scale + self.dy)
    }

    /// Bounding box of `rect` after mapping.
    #[must_use]
    pub fn map_rect(&self, rect: &Rect) -> Rect {
        Rect::bounding(self.map_point(rect.top_left()), self.map_point(rect.bottom_right()))
    }

    /// Lossy conversion for the rasterizer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_skia(&self) -> tiny_skia::Transform {
        let s = self.scale as f32;
        tiny_skia::Transform::from_row(s, 0.0, 0.0, s, self.dx as f32, self.dy as f32)
    }
}
