mod app;
mod config;
mod error;
mod present;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::EditorApp;
use crate::config::EditorConfig;
use crate::error::EditorError;

fn main() -> Result<(), EditorError> {
    tracing_subscriber::fmt::init();

    let config = EditorConfig::default();
    let event_loop = logged("event loop", EventLoop::new())?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = logged("startup", EditorApp::new(config))?;
    logged("event loop", event_loop.run_app(&mut app))?;

    // Already logged when the app stopped itself.
    if let Some(err) = app.take_error() {
        return Err(err);
    }
    tracing::info!("editor closed");
    Ok(())
}

/// Convert a failed step into an [`EditorError`], logging it on the way out.
fn logged<T>(stage: &'static str, result: Result<T, impl Into<EditorError>>) -> Result<T, EditorError> {
    result
        .map_err(Into::into)
        .inspect_err(|err| tracing::error!(error = %err, stage, "editor failed"))
}
