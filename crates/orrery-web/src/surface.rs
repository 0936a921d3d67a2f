use orrery::{FrameBuffer, Surface};
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// A `<canvas>` with a 2D context. Finished frames land through a single
/// `putImageData` call.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the laid-out CSS size, so the buffer is
    /// recreated when the page is resized. Hidden canvases keep their size.
    pub fn sync_to_layout(&mut self) {
        let width = self.canvas.client_width();
        let height = self.canvas.client_height();
        if width <= 0 || height <= 0 {
            return;
        }
        let (width, height) = (width as u32, height as u32);
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), JsValue> {
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(frame.as_bytes()),
            frame.width(),
            frame.height(),
        )?;
        self.ctx.put_image_data(&image, 0.0, 0.0)
    }
}
