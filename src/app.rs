//! Window host: wires winit events to the canvas engine and presents frames.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use canvas::camera::Point;
use canvas::doc::Scene;
use canvas::engine::{Action, Engine};
use canvas::geom::Size;
use canvas::input::{Button, CursorIcon, WheelDelta};
use canvas::sprite::ClippedSprite;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::present::Presenter;

pub struct EditorApp {
    config: EditorConfig,
    engine: Engine,
    window: Option<Rc<Window>>,
    presenter: Option<Presenter>,
    /// Last pointer position in window pixels. Wheel events carry none of their own.
    cursor: Point,
    error: Option<EditorError>,
}

impl EditorApp {
    /// Build the initial scene: one canvas and the seed item.
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        let scene = Scene::new(Size::new(config.canvas_width, config.canvas_height));
        let mut engine = Engine::new(scene, config.background(), config.window_width, config.window_height)?;

        let seed = config.seed;
        let sprite = ClippedSprite::solid(seed.width, seed.height, seed.color())?;
        engine.add_item(sprite, Point::new(seed.x, seed.y));

        Ok(Self { config, engine, window: None, presenter: None, cursor: Point::default(), error: None })
    }

    /// The error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<EditorError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EditorError) {
        tracing::error!(error = %err, "editor stopped");
        self.error = Some(err);
        event_loop.exit();
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EditorError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.window_width, self.config.window_height));
        let window = Rc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        if size.width > 0 && size.height > 0 {
            self.engine.set_viewport(size.width, size.height)?;
        }
        self.engine.center_on_origin();

        self.presenter = Some(Presenter::new(window.clone())?);
        window.request_redraw();
        tracing::info!(width = size.width, height = size.height, "window opened");
        self.window = Some(window);
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), EditorError> {
        let Some(presenter) = self.presenter.as_mut() else {
            return Ok(());
        };
        presenter.present(self.engine.render())
    }

    fn apply(&self, actions: Vec<Action>) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        for action in actions {
            match action {
                Action::RenderNeeded => window.request_redraw(),
                Action::SetCursor(icon) => window.set_cursor(cursor_icon(icon)),
            }
        }
    }
}

impl ApplicationHandler for EditorApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.open_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                // Minimized windows report a zero size; keep the last frame.
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Err(err) = self.engine.set_viewport(size.width, size.height) {
                    self.fail(event_loop, err.into());
                    return;
                }
                self.apply(vec![Action::RenderNeeded]);
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x, position.y);
                let actions = self.engine.on_pointer_move(self.cursor);
                self.apply(actions);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = map_button(button) else {
                    return;
                };
                let actions = match state {
                    ElementState::Pressed => self.engine.on_pointer_down(self.cursor, button),
                    ElementState::Released => self.engine.on_pointer_up(self.cursor, button),
                };
                self.apply(actions);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let actions = self.engine.on_wheel(self.cursor, wheel_delta(delta));
                self.apply(actions);
            }

            _ => {}
        }
    }
}

/// Buttons the engine understands; back/forward and others are dropped.
fn map_button(button: MouseButton) -> Option<Button> {
    match button {
        MouseButton::Left => Some(Button::Primary),
        MouseButton::Middle => Some(Button::Middle),
        MouseButton::Right => Some(Button::Secondary),
        _ => None,
    }
}

/// winit reports both line and pixel deltas with positive `y` away from the user.
fn wheel_delta(delta: MouseScrollDelta) -> WheelDelta {
    match delta {
        MouseScrollDelta::LineDelta(dx, dy) => WheelDelta { dx: f64::from(dx), dy: f64::from(dy) },
        MouseScrollDelta::PixelDelta(pos) => WheelDelta { dx: pos.x, dy: pos.y },
    }
}

fn cursor_icon(icon: CursorIcon) -> winit::window::CursorIcon {
    match icon {
        CursorIcon::Default => winit::window::CursorIcon::Default,
        CursorIcon::Grabbing => winit::window::CursorIcon::Grabbing,
    }
}
