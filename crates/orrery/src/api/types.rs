use bytemuck::{Pod, Zeroable};

/// One RGBA8 pixel, laid out exactly as a canvas `ImageData` expects.
/// 4 bytes per pixel, so a `[Rgba]` slice casts straight to `[u8]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    pub const GRAY: Rgba = Rgba::rgb(128, 128, 128);
}
