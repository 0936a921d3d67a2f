//! Presentation seam between the offscreen frame and a real screen.
//!
//! The core never touches a windowing API. A shell implements [`Surface`]
//! for its canvas (the browser bridge uses a 2D canvas context) and tests
//! implement it in memory.

use crate::renderer::framebuffer::FrameBuffer;

/// A drawable target that finished frames are blitted onto.
pub trait Surface {
    /// Host failure raised while presenting (e.g. `JsValue` in the browser).
    type Error;

    /// Backend identifier (e.g. "canvas2d", "memory").
    fn backend(&self) -> &'static str;

    /// Current drawable size in pixels.
    fn size(&self) -> (u32, u32);

    /// Copy a complete frame to the screen in one operation.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}
