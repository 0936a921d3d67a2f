pub mod api;
pub mod core;
pub mod renderer;
pub mod driver;

// Re-export key types at crate root for convenience
pub use api::config::SimConfig;
pub use api::types::Rgba;
pub use core::state::OrbitalState;
pub use core::time::FixedTimestep;
pub use driver::{AnimationDriver, DriverStatus};
pub use renderer::draw::{build_draw_list, Circle, DrawList};
pub use renderer::framebuffer::FrameBuffer;
pub use renderer::layout::BodyLayout;
pub use renderer::surface::Surface;
pub use renderer::OrbitRenderer;
