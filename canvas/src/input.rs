//! Input model: mouse buttons, wheel deltas, cursors, and the gesture state machine.
//!
//! `InputState` is the view-level gesture being tracked between pointer-down
//! and pointer-up. Per-item drag bookkeeping (the press offset) lives on the
//! group itself; the engine only remembers which group holds the pointer.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::ItemId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// One wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount. Unused by the view.
    pub dx: f64,
    /// Vertical scroll amount (positive = away from the user).
    pub dy: f64,
}

/// Which way a wheel tick zooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl WheelDelta {
    /// Direction of this tick. Magnitude is ignored: every event is one tick.
    ///
    /// Returns `None` for a purely horizontal scroll.
    #[must_use]
    pub fn direction(&self) -> Option<ZoomDirection> {
        if self.dy > 0.0 {
            Some(ZoomDirection::In)
        } else if self.dy < 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

/// Pointer glyph requested from the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    /// Closed hand shown while panning.
    Grabbing,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the view with the middle button held.
    Panning {
        /// Scene point grabbed at press time. It stays under the cursor for the whole gesture.
        anchor_world: Point,
    },
    /// The user is dragging a group with the primary button held.
    DraggingItem {
        /// Id of the group holding the pointer.
        id: ItemId,
    },
}
