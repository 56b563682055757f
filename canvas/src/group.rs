//! Draggable group: one clipped sprite plus its always-visible outline.
//!
//! Positions handed to the drag methods are in the parent's (canvas-local)
//! coordinates. The group converts them to its own local space, so the offset
//! captured on press keeps the grabbed pixel under the pointer for the whole
//! drag.

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, StrokeDash};

use crate::camera::Point;
use crate::consts::{DEFAULT_Z, DRAG_Z, OUTLINE_DASH, OUTLINE_GAP, OUTLINE_WIDTH};
use crate::doc::{Canvas, ItemId};
use crate::geom::{Rect, Transform};
use crate::sprite::ClippedSprite;

/// Per-item drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Between press and release.
    Dragging {
        /// Pointer position in local coordinates at press time.
        offset: Point,
    },
}

/// Dashed rectangle drawn above the sprite, never clipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub rect: Rect,
    pub width: f64,
}

impl Outline {
    /// Outline hugging `rect` with the default pen.
    #[must_use]
    pub fn around(rect: Rect) -> Self {
        Self { rect, width: OUTLINE_WIDTH }
    }

    /// Local bounds including the pen's reach outside `rect`.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        self.rect.grown(self.width / 2.0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn paint(&self, frame: &mut Pixmap, to_device: &Transform) {
        let Some(rect) = tiny_skia::Rect::from_xywh(
            self.rect.x as f32,
            self.rect.y as f32,
            self.rect.width as f32,
            self.rect.height as f32,
        ) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let width = self.width as f32;
        let stroke = Stroke {
            width,
            dash: StrokeDash::new(vec![OUTLINE_DASH as f32 * width, OUTLINE_GAP as f32 * width], 0.0),
            ..Stroke::default()
        };
        let mut paint = Paint::default();
        paint.set_color(Color::from_rgba8(255, 0, 0, 255));
        frame.stroke_path(&path, &paint, &stroke, to_device.to_skia(), None);
    }
}

#[derive(Debug, Clone)]
pub struct DraggableGroup {
    id: ItemId,
    pos: Point,
    z: i32,
    sprite: ClippedSprite,
    outline: Outline,
    drag: DragState,
}

impl DraggableGroup {
    /// Wrap `sprite` at `pos` (parent coordinates) with a fresh id.
    #[must_use]
    pub fn new(sprite: ClippedSprite, pos: Point) -> Self {
        let outline = Outline::around(sprite.bounding_rect());
        Self { id: ItemId::new_v4(), pos, z: DEFAULT_Z, sprite, outline, drag: DragState::Idle }
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Offset from the parent's origin.
    #[must_use]
    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    #[must_use]
    pub fn z(&self) -> i32 {
        self.z
    }

    #[must_use]
    pub fn sprite(&self) -> &ClippedSprite {
        &self.sprite
    }

    #[must_use]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    #[must_use]
    pub fn map_to_parent(&self, local: Point) -> Point {
        local + self.pos
    }

    #[must_use]
    pub fn map_from_parent(&self, parent: Point) -> Point {
        parent - self.pos
    }

    /// Local bounds of sprite and outline together.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        self.outline.bounding_rect()
    }

    /// Bounds in parent coordinates; used for hit-testing.
    #[must_use]
    pub fn parent_bounds(&self) -> Rect {
        self.bounding_rect().translated(self.pos)
    }

    /// Local-to-scene transform of the sprite, given the owning canvas.
    #[must_use]
    pub fn scene_transform(&self, canvas: &Canvas) -> Transform {
        Transform::translation(self.pos).then(&canvas.scene_transform())
    }

    /// Start a drag with the pointer at `parent_pt`. Raises the group above its siblings.
    pub fn press(&mut self, parent_pt: Point) {
        let offset = self.map_from_parent(parent_pt);
        self.drag = DragState::Dragging { offset };
        self.z = DRAG_Z;
    }

    /// Follow the pointer. Returns `true` when the group moved and needs a repaint.
    pub fn drag_to(&mut self, parent_pt: Point) -> bool {
        let DragState::Dragging { offset } = self.drag else {
            return false;
        };
        let local = self.map_from_parent(parent_pt);
        self.pos = self.map_to_parent(local - offset);
        true
    }

    /// End the drag and drop back to the resting z-value.
    pub fn release(&mut self) {
        self.drag = DragState::Idle;
        self.z = DEFAULT_Z;
    }

    /// Paint the clipped sprite, then the outline above it.
    pub fn paint(&self, frame: &mut Pixmap, canvas: &Canvas, view: &Transform) {
        let to_scene = self.scene_transform(canvas);
        self.sprite.paint(frame, canvas, &to_scene, view);
        self.outline.paint(frame, &to_scene.then(view));
    }
}
