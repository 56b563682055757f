use thiserror::Error;

/// Failures that stop the editor.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
    #[error(transparent)]
    Canvas(#[from] canvas::error::CanvasError),
}
