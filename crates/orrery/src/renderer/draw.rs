use glam::DVec2;

use crate::api::config::SimConfig;
use crate::api::types::Rgba;
use crate::core::state::OrbitalState;
use crate::renderer::layout::BodyLayout;

/// A filled circle in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
    pub color: Rgba,
}

/// Ordered draw commands for one frame. Later circles overdraw earlier ones.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    circles: Vec<Circle>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            circles: Vec::with_capacity(3),
        }
    }

    pub fn clear(&mut self) {
        self.circles.clear();
    }

    pub fn push(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Circle> {
        self.circles.iter()
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

/// Build the draw list for one frame: star, then planet, then satellite.
/// A canvas with a zero dimension gets an empty list.
pub fn build_draw_list(
    width: u32,
    height: u32,
    state: &OrbitalState,
    config: &SimConfig,
    list: &mut DrawList,
) {
    list.clear();
    if width == 0 || height == 0 {
        return;
    }

    let layout = BodyLayout::compute(width, height, state, config);
    list.push(Circle {
        center: layout.star,
        radius: config.star_radius,
        color: config.star_color,
    });
    list.push(Circle {
        center: layout.planet,
        radius: config.planet_radius,
        color: config.planet_color,
    });
    list.push(Circle {
        center: layout.satellite,
        radius: config.satellite_radius,
        color: config.satellite_color,
    });
}
