//! Rendering: draws the full scene into an RGBA frame.
//!
//! This module receives read-only views of the scene and camera and produces
//! pixels. It does not mutate any application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use tiny_skia::{Color, Paint, Pixmap};

use crate::camera::Camera;
use crate::doc::{Canvas, Scene};
use crate::geom::{Transform, frame_rect};

/// Fill of the canvas rectangle.
const CANVAS_COLOR: Color = Color::BLACK;

/// Draw the full scene: backdrop, canvas, then groups in z-order.
pub fn draw(frame: &mut Pixmap, scene: &Scene, camera: &Camera, background: Color) {
    let view = camera.transform();

    // Layer 1: backdrop.
    frame.fill(background);

    // Layer 2: canvas.
    let canvas = scene.canvas();
    draw_canvas(frame, canvas, &view);

    // Layer 3: groups, bottom first.
    for group in canvas.sorted_children() {
        group.paint(frame, canvas, &view);
    }
}

/// Fill the canvas rect, cut down to the frame in device space.
fn draw_canvas(frame: &mut Pixmap, canvas: &Canvas, view: &Transform) {
    let to_device = canvas.scene_transform().then(view);
    let Some(area) = to_device.map_rect(&canvas.bounding_rect()).intersection(&frame_rect(frame)) else {
        return;
    };
    let Some(area) = area.to_skia() else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(CANVAS_COLOR);
    frame.fill_rect(area, &paint, tiny_skia::Transform::identity(), None);
}
