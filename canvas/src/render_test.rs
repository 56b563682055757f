use super::*;
use crate::camera::Point;
use crate::doc::ItemId;
use crate::sprite::ClippedSprite;

// =============================================================
// Helpers
// =============================================================

fn backdrop() -> Color {
    Color::from_rgba8(50, 50, 50, 255)
}

fn frame(w: u32, h: u32) -> Pixmap {
    match Pixmap::new(w, h) {
        Some(p) => p,
        None => panic!("frame allocation failed"),
    }
}

fn rgb(frame: &Pixmap, x: u32, y: u32) -> Option<(u8, u8, u8)> {
    frame.pixel(x, y).map(|p| (p.red(), p.green(), p.blue()))
}

fn is_red(frame: &Pixmap, x: u32, y: u32) -> bool {
    rgb(frame, x, y).is_some_and(|(r, g, b)| r > 240 && g == 0 && b == 0)
}

/// Full HD canvas with a 200x200 red square at canvas-local (500, 300),
/// seen at zoom 0.1 with the origin at the middle of a 400x300 frame.
///
/// Canvas covers device (104..296, 96..204); the square covers (154..174, 126..146).
fn seeded() -> (Scene, Camera, ItemId) {
    let mut scene = Scene::default();
    let sprite = match ClippedSprite::solid(200, 200, Color::from_rgba8(255, 0, 0, 255)) {
        Ok(sprite) => sprite,
        Err(e) => panic!("sprite allocation failed: {e}"),
    };
    let id = scene.add_item(sprite, Point::new(500.0, 300.0));
    let mut camera = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 0.1 };
    camera.look_at(Point::new(0.0, 0.0), Point::new(200.0, 150.0));
    (scene, camera, id)
}

// =============================================================
// Layers
// =============================================================

#[test]
fn backdrop_fills_area_outside_canvas() {
    let (scene, camera, _) = seeded();
    let mut out = frame(400, 300);
    draw(&mut out, &scene, &camera, backdrop());
    assert_eq!(rgb(&out, 5, 5), Some((50, 50, 50)));
    assert_eq!(rgb(&out, 395, 295), Some((50, 50, 50)));
}

#[test]
fn canvas_is_black() {
    let (scene, camera, _) = seeded();
    let mut out = frame(400, 300);
    draw(&mut out, &scene, &camera, backdrop());
    assert_eq!(rgb(&out, 200, 150), Some((0, 0, 0)));
    assert_eq!(rgb(&out, 110, 100), Some((0, 0, 0)));
    assert_eq!(rgb(&out, 100, 100), Some((50, 50, 50)));
}

#[test]
fn sprite_is_drawn_inside_canvas() {
    let (scene, camera, _) = seeded();
    let mut out = frame(400, 300);
    draw(&mut out, &scene, &camera, backdrop());
    assert!(is_red(&out, 164, 136));
}

#[test]
fn sprite_dragged_off_canvas_shows_no_pixels() {
    let (mut scene, camera, id) = seeded();
    if let Some(g) = scene.item_mut(&id) {
        g.set_pos(Point::new(2000.0, 300.0));
    }
    let mut out = frame(400, 300);
    draw(&mut out, &scene, &camera, backdrop());

    // The square would cover device (304..324, 126..146); only the hairline outline remains.
    for x in 306..322 {
        for y in 128..144 {
            assert_eq!(rgb(&out, x, y), Some((50, 50, 50)), "pixel ({x}, {y})");
        }
    }
    let Some(group) = scene.item(&id) else {
        panic!("item missing");
    };
    let canvas = scene.canvas();
    assert_eq!(group.sprite().visible_region(canvas, &group.scene_transform(canvas)), None);
}

#[test]
fn canvas_resize_updates_clip_on_next_draw() {
    let (mut scene, camera, id) = seeded();
    if let Some(g) = scene.item_mut(&id) {
        g.set_pos(Point::new(2000.0, 300.0));
    }
    // Wider canvas: pos (-1500, -540), so the square now sits at scene (500, -240),
    // device (250..270, 126..146), inside the canvas (device 50..350).
    scene.resize_canvas(3000.0, 1080.0);
    let mut out = frame(400, 300);
    draw(&mut out, &scene, &camera, backdrop());
    assert!(is_red(&out, 260, 136));
}

#[test]
fn dragged_group_paints_above_siblings() {
    let mut scene = Scene::default();
    let blue = match ClippedSprite::solid(200, 200, Color::from_rgba8(0, 0, 255, 255)) {
        Ok(sprite) => sprite,
        Err(e) => panic!("sprite allocation failed: {e}"),
    };
    let red = match ClippedSprite::solid(200, 200, Color::from_rgba8(255, 0, 0, 255)) {
        Ok(sprite) => sprite,
        Err(e) => panic!("sprite allocation failed: {e}"),
    };
    let bottom = scene.add_item(red, Point::new(860.0, 440.0));
    scene.add_item(blue, Point::new(860.0, 440.0));

    // Zoom 1, origin at (200, 150): both squares cover device (100..300, 50..250).
    let mut camera = Camera::default();
    camera.look_at(Point::new(0.0, 0.0), Point::new(200.0, 150.0));

    let mut out = frame(400, 300);
    draw(&mut out, &scene, &camera, backdrop());
    assert_eq!(rgb(&out, 200, 150), Some((0, 0, 255)));

    if let Some(g) = scene.item_mut(&bottom) {
        g.press(Point::new(900.0, 500.0));
    }
    draw(&mut out, &scene, &camera, backdrop());
    assert_eq!(rgb(&out, 200, 150), Some((255, 0, 0)));
}

// =============================================================
// Deep zoom
// =============================================================

/// Zoom in `ticks` times about the middle of a 400x300 frame with `world` under it.
fn zoomed_onto(world: Point, ticks: usize) -> Camera {
    let mid = Point::new(200.0, 150.0);
    let mut camera = Camera::default();
    camera.look_at(world, mid);
    for _ in 0..ticks {
        camera.zoom_at(mid, crate::consts::ZOOM_IN_FACTOR);
    }
    camera
}

#[test]
fn deep_zoom_still_paints_sprite_and_canvas() {
    let (scene, _, _) = seeded();
    // Square center: canvas top-left (-960, -540) + (600, 400).
    for ticks in [80, 100, 120] {
        let camera = zoomed_onto(Point::new(-360.0, -140.0), ticks);
        let mut out = frame(400, 300);
        draw(&mut out, &scene, &camera, backdrop());
        assert!(is_red(&out, 200, 150), "{ticks} ticks");
    }

    let camera = zoomed_onto(Point::new(0.0, 0.0), 120);
    let mut out = frame(400, 300);
    draw(&mut out, &scene, &camera, backdrop());
    assert_eq!(rgb(&out, 200, 150), Some((0, 0, 0)));
}

#[test]
fn deep_zoom_keeps_clip_edges() {
    let (scene, _, _) = seeded();

    // Canvas right edge at scene x = 960.
    let camera = zoomed_onto(Point::new(960.0, 0.0), 100);
    let mut out = frame(400, 300);
    draw(&mut out, &scene, &camera, backdrop());
    assert_eq!(rgb(&out, 190, 150), Some((0, 0, 0)));
    assert_eq!(rgb(&out, 210, 150), Some((50, 50, 50)));

    // Square right edge at scene x = -160, inside the canvas.
    let camera = zoomed_onto(Point::new(-160.0, -140.0), 100);
    let mut out = frame(400, 300);
    draw(&mut out, &scene, &camera, backdrop());
    assert!(is_red(&out, 190, 150));
    assert_eq!(rgb(&out, 210, 150), Some((0, 0, 0)));
}
