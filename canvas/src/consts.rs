//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Scale multiplier applied for one wheel tick away from the user.
pub const ZOOM_IN_FACTOR: f64 = 1.15;

/// Scale multiplier applied for one wheel tick toward the user.
pub const ZOOM_OUT_FACTOR: f64 = 0.85;

// ── Canvas ──────────────────────────────────────────────────────

/// Default canvas width in scene units.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1920.0;

/// Default canvas height in scene units.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1080.0;

// ── Stacking ────────────────────────────────────────────────────

/// Resting z-value of a group among its siblings.
pub const DEFAULT_Z: i32 = 0;

/// z-value of a group while it is being dragged.
pub const DRAG_Z: i32 = 3;

// ── Outline pen ─────────────────────────────────────────────────

/// Outline stroke width in scene units. Scales with zoom.
pub const OUTLINE_WIDTH: f64 = 2.0;

/// Dash segment length, in pen widths.
pub const OUTLINE_DASH: f64 = 4.0;

/// Gap between dashes, in pen widths.
pub const OUTLINE_GAP: f64 = 2.0;
