//! Scene document: the canvas and the groups it owns.
//!
//! Ownership is a strict tree. The [`Scene`] owns the single [`Canvas`], the
//! canvas owns every [`DraggableGroup`], and each group owns its sprite and
//! outline. Dropping the scene drops everything below it.
//!
//! Group positions are offsets from the canvas's top-left corner, so moving
//! the canvas (on resize) carries its children with it.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::geom::{Rect, Size, Transform};
use crate::group::DraggableGroup;
use crate::sprite::ClippedSprite;

/// Unique identifier for a draggable group.
pub type ItemId = Uuid;

/// The output frame boundary, centered on the scene origin.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Size,
    pos: Point,
    children: Vec<DraggableGroup>,
}

impl Canvas {
    /// A canvas of `size`, centered on the scene origin, with no children.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self { size, pos: centered_pos(size), children: Vec::new() }
    }

    /// Change the size and recenter on the scene origin.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.pos = centered_pos(size);
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Local bounds: `(0, 0, w, h)`.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Top-left corner in scene coordinates.
    ///
    /// The canvas is a top-level item, so its position is its scene position.
    #[must_use]
    pub fn scene_pos(&self) -> Point {
        self.pos
    }

    /// Bounds in scene coordinates.
    #[must_use]
    pub fn scene_rect(&self) -> Rect {
        self.bounding_rect().translated(self.pos)
    }

    /// Canvas-local to scene.
    #[must_use]
    pub fn scene_transform(&self) -> Transform {
        Transform::translation(self.pos)
    }

    #[must_use]
    pub fn map_from_scene(&self, scene_pt: Point) -> Point {
        scene_pt - self.pos
    }

    /// Take ownership of `group` and return its id.
    pub fn add_child(&mut self, group: DraggableGroup) -> ItemId {
        let id = group.id();
        self.children.push(group);
        id
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[DraggableGroup] {
        &self.children
    }

    #[must_use]
    pub fn child(&self, id: &ItemId) -> Option<&DraggableGroup> {
        self.children.iter().find(|g| g.id() == *id)
    }

    pub fn child_mut(&mut self, id: &ItemId) -> Option<&mut DraggableGroup> {
        self.children.iter_mut().find(|g| g.id() == *id)
    }

    /// Children in paint order: ascending z, insertion order among equals.
    #[must_use]
    pub fn sorted_children(&self) -> Vec<&DraggableGroup> {
        let mut groups: Vec<&DraggableGroup> = self.children.iter().collect();
        groups.sort_by_key(|g| g.z());
        groups
    }
}

fn centered_pos(size: Size) -> Point {
    Point::new(-size.width / 2.0, -size.height / 2.0)
}

/// The scene graph root.
#[derive(Debug, Clone)]
pub struct Scene {
    canvas: Canvas,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT))
    }
}

impl Scene {
    /// A scene holding an empty canvas of `canvas_size`.
    #[must_use]
    pub fn new(canvas_size: Size) -> Self {
        Self { canvas: Canvas::new(canvas_size) }
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Resize the canvas to `width` x `height` and recenter it.
    pub fn resize_canvas(&mut self, width: f64, height: f64) {
        self.canvas.resize(Size::new(width, height));
    }

    /// Attach a new draggable group for `sprite` at canvas-local `pos`.
    pub fn add_item(&mut self, sprite: ClippedSprite, pos: Point) -> ItemId {
        self.canvas.add_child(DraggableGroup::new(sprite, pos))
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&DraggableGroup> {
        self.canvas.child(id)
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut DraggableGroup> {
        self.canvas.child_mut(id)
    }

    /// Number of groups on the canvas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.canvas.children.len()
    }

    /// Returns `true` if the canvas holds no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canvas.children.is_empty()
    }
}
