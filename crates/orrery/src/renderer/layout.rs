use glam::DVec2;

use crate::api::config::SimConfig;
use crate::core::state::OrbitalState;

/// Screen-space centres of the three bodies for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyLayout {
    pub star: DVec2,
    pub planet: DVec2,
    pub satellite: DVec2,
}

impl BodyLayout {
    /// Place the star at the canvas centre, the planet on its orbit around
    /// the star, and the satellite on its orbit around the planet.
    pub fn compute(width: u32, height: u32, state: &OrbitalState, config: &SimConfig) -> Self {
        let star = DVec2::new(width as f64 / 2.0, height as f64 / 2.0);
        let planet = star + config.planet_orbit_radius * DVec2::from_angle(state.planet_angle);
        let satellite =
            planet + config.satellite_orbit_radius * DVec2::from_angle(state.satellite_angle);
        Self {
            star,
            planet,
            satellite,
        }
    }
}
