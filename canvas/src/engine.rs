use tiny_skia::{Color, Pixmap};

use crate::camera::{Camera, Point};
use crate::consts::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::doc::{ItemId, Scene};
use crate::error::CanvasError;
use crate::group::DraggableGroup;
use crate::hit::hit_test;
use crate::input::{Button, CursorIcon, InputState, WheelDelta, ZoomDirection};
use crate::render;
use crate::sprite::ClippedSprite;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    SetCursor(CursorIcon),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the frame buffer.
///
/// Separated from `Engine` so gestures can be tested without rasterizing.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub scene: Scene,
    pub camera: Camera,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self { scene, ..Self::default() }
    }

    // --- Viewport ---

    /// Record the viewport size in pixels. The camera is left untouched.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Pan so that the scene origin (the canvas center) sits mid-viewport.
    pub fn center_on_origin(&mut self) {
        let mid = Point::new(self.viewport_width * 0.5, self.viewport_height * 0.5);
        self.camera.look_at(Point::default(), mid);
    }

    // --- Scene edits ---

    /// Resize the canvas and recenter it on the scene origin.
    pub fn resize_canvas(&mut self, width: f64, height: f64) -> Action {
        self.scene.resize_canvas(width, height);
        tracing::debug!(width, height, "canvas resized");
        Action::RenderNeeded
    }

    /// Add a draggable group showing `sprite` at canvas-local `pos`.
    pub fn add_item(&mut self, sprite: ClippedSprite, pos: Point) -> ItemId {
        let id = self.scene.add_item(sprite, pos);
        tracing::debug!(%id, x = pos.x, y = pos.y, "item added");
        id
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if self.input != InputState::Idle {
            return Vec::new();
        }
        match button {
            Button::Middle => self.begin_pan(screen_pt),
            Button::Primary => self.begin_drag(screen_pt),
            Button::Secondary => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { anchor_world } => self.update_pan(anchor_world, screen_pt),
            InputState::DraggingItem { id } => self.update_drag(id, screen_pt),
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button) -> Vec<Action> {
        match (self.input, button) {
            (InputState::Panning { .. }, Button::Middle) => self.end_pan(),
            (InputState::DraggingItem { id }, Button::Primary) => self.end_drag(id),
            _ => Vec::new(),
        }
    }

    /// Zoom by one tick about `screen_pt`.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let factor = match delta.direction() {
            Some(ZoomDirection::In) => ZOOM_IN_FACTOR,
            Some(ZoomDirection::Out) => ZOOM_OUT_FACTOR,
            None => return Vec::new(),
        };
        self.camera.zoom_at(screen_pt, factor);
        tracing::debug!(zoom = self.camera.zoom, "zoom");
        vec![Action::RenderNeeded]
    }

    // --- Gestures ---

    fn begin_pan(&mut self, screen_pt: Point) -> Vec<Action> {
        let anchor_world = self.camera.screen_to_world(screen_pt);
        self.input = InputState::Panning { anchor_world };
        tracing::debug!(x = anchor_world.x, y = anchor_world.y, "pan start");
        vec![Action::SetCursor(CursorIcon::Grabbing)]
    }

    fn update_pan(&mut self, anchor_world: Point, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        self.camera.translate_world(world - anchor_world);
        vec![Action::RenderNeeded]
    }

    fn end_pan(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        tracing::debug!(pan_x = self.camera.pan_x, pan_y = self.camera.pan_y, "pan end");
        vec![Action::SetCursor(CursorIcon::Default)]
    }

    fn begin_drag(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        let Some(id) = hit_test(world, self.scene.canvas()) else {
            return Vec::new();
        };
        let local = self.scene.canvas().map_from_scene(world);
        let Some(group) = self.scene.item_mut(&id) else {
            return Vec::new();
        };
        group.press(local);
        self.input = InputState::DraggingItem { id };
        tracing::debug!(%id, "drag start");
        vec![Action::RenderNeeded]
    }

    fn update_drag(&mut self, id: ItemId, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        let local = self.scene.canvas().map_from_scene(world);
        let Some(group) = self.scene.item_mut(&id) else {
            return Vec::new();
        };
        if group.drag_to(local) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    fn end_drag(&mut self, id: ItemId) -> Vec<Action> {
        self.input = InputState::Idle;
        let Some(group) = self.scene.item_mut(&id) else {
            return Vec::new();
        };
        group.release();
        tracing::debug!(%id, x = group.pos().x, y = group.pos().y, "drag end");
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up a group by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&DraggableGroup> {
        self.scene.item(id)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the frame it renders into.
pub struct Engine {
    frame: Pixmap,
    background: Color,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine rendering `scene` into a `width` x `height` frame.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidDimensions`] if the frame cannot be allocated.
    pub fn new(scene: Scene, background: Color, width: u32, height: u32) -> Result<Self, CanvasError> {
        let frame = alloc_frame(width, height)?;
        let mut core = EngineCore::new(scene);
        core.set_viewport(f64::from(width), f64::from(height));
        Ok(Self { frame, background, core })
    }

    // --- Viewport ---

    /// Reallocate the frame for a new window size.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidDimensions`] if the frame cannot be allocated.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        if self.frame.width() != width || self.frame.height() != height {
            self.frame = alloc_frame(width, height)?;
        }
        self.core.set_viewport(f64::from(width), f64::from(height));
        Ok(())
    }

    pub fn center_on_origin(&mut self) {
        self.core.center_on_origin();
    }

    // --- Delegated scene edits ---

    pub fn resize_canvas(&mut self, width: f64, height: f64) -> Action {
        self.core.resize_canvas(width, height)
    }

    pub fn add_item(&mut self, sprite: ClippedSprite, pos: Point) -> ItemId {
        self.core.add_item(sprite, pos)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    // --- Render ---

    /// Draw the current state and return the finished frame.
    pub fn render(&mut self) -> &Pixmap {
        render::draw(&mut self.frame, &self.core.scene, &self.core.camera, self.background);
        &self.frame
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&DraggableGroup> {
        self.core.item(id)
    }
}

fn alloc_frame(width: u32, height: u32) -> Result<Pixmap, CanvasError> {
    Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })
}
