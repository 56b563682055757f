use std::io;
use std::sync::{Arc, Mutex};

use canvas::error::CanvasError;

use super::*;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        match self.0.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => panic!("log buffer poisoned"),
        }
    }
}

impl io::Write for Captured {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut buf) => buf.extend_from_slice(data),
            Err(_) => panic!("log buffer poisoned"),
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, captured.text())
}

#[test]
fn failed_step_is_logged_and_converted() {
    let failure: Result<(), CanvasError> = Err(CanvasError::InvalidDimensions { width: 0, height: 10 });
    let (result, logs) = with_captured_logs(|| logged("startup", failure));

    assert!(matches!(result, Err(EditorError::Canvas(CanvasError::InvalidDimensions { width: 0, height: 10 }))));
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("editor failed"));
    assert!(logs.contains("stage=\"startup\""));
    assert!(logs.contains("invalid pixmap dimensions: 0x10"));
}

#[test]
fn successful_step_logs_nothing() {
    let ok: Result<u32, CanvasError> = Ok(7);
    let (result, logs) = with_captured_logs(|| logged("startup", ok));

    assert!(matches!(result, Ok(7)));
    assert!(logs.is_empty());
}
