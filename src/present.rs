//! Copies rendered frames into the window through a softbuffer surface.

#[cfg(test)]
#[path = "present_test.rs"]
mod present_test;

use std::num::NonZeroU32;
use std::rc::Rc;

use softbuffer::{Context, Surface};
use tiny_skia::{Pixmap, PremultipliedColorU8};
use winit::window::Window;

use crate::error::EditorError;

pub struct Presenter {
    // Dropped before the context it was created from.
    surface: Surface<Rc<Window>, Rc<Window>>,
    _context: Context<Rc<Window>>,
    size: Option<(NonZeroU32, NonZeroU32)>,
}

impl Presenter {
    pub fn new(window: Rc<Window>) -> Result<Self, EditorError> {
        let context = Context::new(window.clone())?;
        let surface = Surface::new(&context, window)?;
        Ok(Self { surface, _context: context, size: None })
    }

    /// Show `frame` in the window. An empty frame is skipped.
    pub fn present(&mut self, frame: &Pixmap) -> Result<(), EditorError> {
        let (Some(width), Some(height)) = (NonZeroU32::new(frame.width()), NonZeroU32::new(frame.height())) else {
            return Ok(());
        };
        if self.size != Some((width, height)) {
            self.surface.resize(width, height)?;
            self.size = Some((width, height));
        }

        let mut buffer = self.surface.buffer_mut()?;
        for (dst, src) in buffer.iter_mut().zip(frame.pixels()) {
            *dst = pack_pixel(*src);
        }
        buffer.present()?;
        Ok(())
    }
}

/// Pack a frame pixel as softbuffer's `0RGB`.
///
/// Frames are opaque (the backdrop covers everything), so premultiplied and
/// straight color agree.
#[must_use]
pub fn pack_pixel(px: PremultipliedColorU8) -> u32 {
    (u32::from(px.red()) << 16) | (u32::from(px.green()) << 8) | u32::from(px.blue())
}
