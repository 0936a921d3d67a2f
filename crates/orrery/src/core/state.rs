use crate::api::config::SimConfig;

/// The three numbers that fully determine the rendered scene.
///
/// Angles are in radians and grow without bound; `cos`/`sin` are periodic,
/// so no wraparound is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitalState {
    /// Simulated days elapsed (one per tick).
    pub day_count: u64,
    /// Planet angle around the star.
    pub planet_angle: f64,
    /// Satellite angle around the planet.
    pub satellite_angle: f64,
}

impl OrbitalState {
    pub const ZERO: Self = Self {
        day_count: 0,
        planet_angle: 0.0,
        satellite_angle: 0.0,
    };

    /// Advance by one tick in place.
    pub fn step(&mut self, config: &SimConfig) {
        self.day_count += 1;
        self.planet_angle += config.planet_speed;
        self.satellite_angle += config.satellite_speed;
    }

    /// Return the state one tick later, leaving `self` untouched.
    pub fn stepped(mut self, config: &SimConfig) -> Self {
        self.step(config);
        self
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
