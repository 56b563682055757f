//! A bitmap that only paints the part of itself lying inside the canvas.
//!
//! The clip region is rebuilt on every paint from the canvas as it is at that
//! moment. Both the sprite (dragged) and the canvas (resized, recentered) move
//! independently between paints, so nothing about the clip is cached.

#[cfg(test)]
#[path = "sprite_test.rs"]
mod sprite_test;

use tiny_skia::{Color, FilterQuality, Paint, Pattern, Pixmap, SpreadMode};

use crate::doc::Canvas;
use crate::error::CanvasError;
use crate::geom::{Rect, Size, Transform, frame_rect};

#[derive(Debug, Clone)]
pub struct ClippedSprite {
    pixmap: Pixmap,
}

impl ClippedSprite {
    #[must_use]
    pub fn new(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    /// A `width` x `height` bitmap filled with a single color.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidDimensions`] for a zero or oversized bitmap.
    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self, CanvasError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;
        pixmap.fill(color);
        Ok(Self::new(pixmap))
    }

    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.pixmap.width()), f64::from(self.pixmap.height()))
    }

    /// The sprite's own rect in local coordinates: `(0, 0, w, h)`.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_size(self.size())
    }

    /// Canvas bounds expressed in this sprite's local coordinates.
    ///
    /// `to_scene` is the sprite's current local-to-scene transform. Returns
    /// `None` only when that transform cannot be inverted.
    #[must_use]
    pub fn clip_region(&self, canvas: &Canvas, to_scene: &Transform) -> Option<Rect> {
        let canvas_scene = canvas.bounding_rect().translated(canvas.scene_pos());
        let from_scene = to_scene.inverse()?;
        Some(from_scene.map_rect(&canvas_scene))
    }

    /// The part of the bitmap that would be painted, in local coordinates.
    #[must_use]
    pub fn visible_region(&self, canvas: &Canvas, to_scene: &Transform) -> Option<Rect> {
        let clip = self.clip_region(canvas, to_scene)?;
        self.bounding_rect().intersection(&clip)
    }

    /// Paint the bitmap into `frame`, clipped to the canvas.
    ///
    /// `view` maps scene coordinates to frame pixels. Only the visible part,
    /// cut down to the frame in device space, is rasterized, so arbitrarily
    /// deep zoom still paints.
    pub fn paint(&self, frame: &mut Pixmap, canvas: &Canvas, to_scene: &Transform, view: &Transform) {
        let Some(visible) = self.visible_region(canvas, to_scene) else {
            return;
        };
        let to_device = to_scene.then(view);
        let Some(area) = to_device.map_rect(&visible).intersection(&frame_rect(frame)) else {
            return;
        };
        let Some(area) = area.to_skia() else {
            return;
        };
        let mut paint = Paint::default();
        paint.shader = Pattern::new(
            self.pixmap.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Nearest,
            1.0,
            to_device.to_skia(),
        );
        frame.fill_rect(area, &paint, tiny_skia::Transform::identity(), None);
    }
}
