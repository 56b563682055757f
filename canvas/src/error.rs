//! Errors raised while allocating pixel buffers.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// A bitmap or frame was requested with a zero or oversized dimension.
    #[error("invalid pixmap dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
