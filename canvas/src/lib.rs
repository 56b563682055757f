//! Scene, view and input engine for the canvas editor.
//!
//! This crate owns everything below the window: the view transform for
//! pan/zoom, the canvas and the draggable groups it holds, the gesture state
//! machine, hit-testing, and software rendering into an RGBA frame. The host
//! binary is responsible only for wiring window events to the engine and
//! presenting the frames it produces.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Scene graph: the canvas and the groups it owns |
//! | [`group`] | Draggable group: sprite, outline, drag state |
//! | [`sprite`] | Bitmap clipped to the canvas on every paint |
//! | [`camera`] | View transform and coordinate conversions |
//! | [`geom`] | Rects and scale+translate transforms |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against groups |
//! | [`render`] | Scene rendering |
//! | [`consts`] | Shared numeric constants (zoom factors, z-values, outline pen) |
//! | [`error`] | Allocation errors |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod group;
pub mod hit;
pub mod input;
pub mod render;
pub mod sprite;
