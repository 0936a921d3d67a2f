use glam::DVec2;

use crate::api::types::Rgba;

/// Offscreen RGBA8 pixel buffer sized to the canvas.
/// A frame is composed here in full, then blitted to the screen once.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::default(); width as usize * height as usize],
        }
    }

    /// Recreate storage if the dimensions changed. Returns true if they did.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        log::debug!(
            "frame buffer {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        *self = Self::new(width, height);
        true
    }

    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Paint every pixel whose centre lies within `radius` of `center`.
    /// Pixels outside the buffer are skipped.
    pub fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        if self.is_empty() || radius <= 0.0 {
            return;
        }

        let x0 = (center.x - radius).floor().max(0.0);
        let y0 = (center.y - radius).floor().max(0.0);
        let x1 = (center.x + radius).ceil().min(self.width as f64);
        let y1 = (center.y + radius).ceil().min(self.height as f64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let r2 = radius * radius;
        for y in y0 as u32..y1 as u32 {
            let dy = y as f64 + 0.5 - center.y;
            let row = y as usize * self.width as usize;
            for x in x0 as u32..x1 as u32 {
                let dx = x as f64 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.pixels[row + x as usize] = color;
                }
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Row-major RGBA bytes, ready for a single blit.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
