use crate::api::types::Rgba;

/// Seconds between timer firings. One firing is one simulated day.
pub const TICK_INTERVAL: f64 = 0.1;

/// Radians added to the planet's angle per tick.
pub const PLANET_SPEED: f64 = 0.05;
/// Radians added to the satellite's angle per tick.
pub const SATELLITE_SPEED: f64 = 0.1;

/// Planet orbit radius around the star, in pixels.
pub const PLANET_ORBIT_RADIUS: f64 = 150.0;
/// Satellite orbit radius around the planet, in pixels.
pub const SATELLITE_ORBIT_RADIUS: f64 = 30.0;

pub const STAR_RADIUS: f64 = 20.0;
pub const PLANET_RADIUS: f64 = 10.0;
pub const SATELLITE_RADIUS: f64 = 5.0;

pub const STAR_COLOR: Rgba = Rgba::YELLOW;
pub const PLANET_COLOR: Rgba = Rgba::BLUE;
pub const SATELLITE_COLOR: Rgba = Rgba::GRAY;
/// Light panel gray behind the bodies.
pub const BACKGROUND_COLOR: Rgba = Rgba::rgb(238, 238, 238);

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

pub const WINDOW_TITLE: &str = "Solar System Simulation";

/// Upper bound on timer firings delivered by a single `advance` call.
/// Late firings after a stall merge into one.
pub const MAX_CATCH_UP_TICKS: u32 = 1;

/// Compiled-in simulation and drawing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Fixed timer interval in seconds (default: 0.1).
    pub tick_interval: f64,
    /// Planet angular speed in radians per tick (default: 0.05).
    pub planet_speed: f64,
    /// Satellite angular speed in radians per tick (default: 0.1).
    pub satellite_speed: f64,
    pub planet_orbit_radius: f64,
    pub satellite_orbit_radius: f64,
    pub star_radius: f64,
    pub planet_radius: f64,
    pub satellite_radius: f64,
    pub star_color: Rgba,
    pub planet_color: Rgba,
    pub satellite_color: Rgba,
    pub background: Rgba,
    /// Initial canvas width in pixels (default: 800).
    pub canvas_width: u32,
    /// Initial canvas height in pixels (default: 600).
    pub canvas_height: u32,
    /// Page title (default: "Solar System Simulation").
    pub title: &'static str,
    pub max_catch_up_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            planet_speed: PLANET_SPEED,
            satellite_speed: SATELLITE_SPEED,
            planet_orbit_radius: PLANET_ORBIT_RADIUS,
            satellite_orbit_radius: SATELLITE_ORBIT_RADIUS,
            star_radius: STAR_RADIUS,
            planet_radius: PLANET_RADIUS,
            satellite_radius: SATELLITE_RADIUS,
            star_color: STAR_COLOR,
            planet_color: PLANET_COLOR,
            satellite_color: SATELLITE_COLOR,
            background: BACKGROUND_COLOR,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            title: WINDOW_TITLE,
            max_catch_up_ticks: MAX_CATCH_UP_TICKS,
        }
    }
}
