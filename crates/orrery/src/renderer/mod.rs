pub mod draw;
pub mod framebuffer;
pub mod layout;
pub mod surface;

use crate::api::config::SimConfig;
use crate::core::state::OrbitalState;
use draw::{build_draw_list, DrawList};
use framebuffer::FrameBuffer;

// Re-export key types for convenient access
pub use surface::Surface;

/// Composes frames offscreen: draw list in, finished pixel buffer out.
/// Owns its buffer exclusively and recreates it when the canvas size changes.
pub struct OrbitRenderer {
    config: SimConfig,
    draw_list: DrawList,
    frame: FrameBuffer,
}

impl OrbitRenderer {
    pub fn new(config: SimConfig) -> Self {
        let frame = FrameBuffer::new(config.canvas_width, config.canvas_height);
        Self {
            config,
            draw_list: DrawList::new(),
            frame,
        }
    }

    /// Render one frame for a `width × height` canvas.
    /// Returns `None` for a canvas with a zero dimension.
    pub fn render(&mut self, width: u32, height: u32, state: &OrbitalState) -> Option<&FrameBuffer> {
        self.frame.resize(width, height);
        build_draw_list(width, height, state, &self.config, &mut self.draw_list);
        if self.frame.is_empty() {
            return None;
        }

        self.frame.clear(self.config.background);
        for circle in self.draw_list.iter() {
            self.frame.fill_circle(circle.center, circle.radius, circle.color);
        }
        Some(&self.frame)
    }
}

impl Default for OrbitRenderer {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
