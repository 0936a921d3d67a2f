//! Animation driver: the play/pause/stop state machine around the stepper.
//!
//! The driver owns the only mutable [`OrbitalState`]. A host calls
//! [`AnimationDriver::advance`] with elapsed wall-clock time (or
//! [`AnimationDriver::tick`] per timer firing) and checks
//! [`AnimationDriver::take_redraw`] to decide whether to repaint.

use crate::api::config::SimConfig;
use crate::core::state::OrbitalState;
use crate::core::time::FixedTimestep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverStatus {
    #[default]
    Stopped,
    Running,
    Paused,
}

pub struct AnimationDriver {
    config: SimConfig,
    state: OrbitalState,
    status: DriverStatus,
    timer: FixedTimestep,
    redraw_requested: bool,
}

impl AnimationDriver {
    pub fn new(config: SimConfig) -> Self {
        let timer = FixedTimestep::new(config.tick_interval, config.max_catch_up_ticks);
        Self {
            config,
            state: OrbitalState::ZERO,
            status: DriverStatus::Stopped,
            timer,
            // First paint shows the initial scene.
            redraw_requested: true,
        }
    }

    /// Begin or resume firing. No-op while already running.
    pub fn start(&mut self) {
        if self.status == DriverStatus::Running {
            return;
        }
        log::debug!("driver {:?} -> Running at day {}", self.status, self.state.day_count);
        self.status = DriverStatus::Running;
        self.timer.reset();
    }

    /// Stop firing and keep the current state. No-op unless running.
    pub fn pause(&mut self) {
        if self.status != DriverStatus::Running {
            return;
        }
        log::debug!("driver Running -> Paused at day {}", self.state.day_count);
        self.status = DriverStatus::Paused;
        self.timer.reset();
    }

    /// Stop firing, zero the state, and request one redraw. Valid from any state.
    pub fn stop(&mut self) {
        log::info!("driver reset from {:?} at day {}", self.status, self.state.day_count);
        self.status = DriverStatus::Stopped;
        self.timer.reset();
        self.state = OrbitalState::ZERO;
        self.redraw_requested = true;
    }

    /// One timer firing. Steps and requests a redraw only while running.
    /// Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if self.status != DriverStatus::Running {
            return false;
        }
        self.state.step(&self.config);
        self.redraw_requested = true;
        true
    }

    /// Feed elapsed wall-clock seconds to the fixed-interval timer and fire
    /// once per whole interval. Time that passes while not running is dropped.
    /// Returns the number of firings.
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        if self.status != DriverStatus::Running {
            return 0;
        }
        let steps = self.timer.accumulate(elapsed);
        for _ in 0..steps {
            self.tick();
        }
        steps
    }

    /// Consume a pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Ask for a repaint without touching the state (e.g. after a canvas resize).
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Read-only snapshot for rendering.
    pub fn state(&self) -> OrbitalState {
        self.state
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn day_label(&self) -> String {
        format!("Day: {}", self.state.day_count)
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: f64 = 0.1;

    fn running() -> AnimationDriver {
        let mut d = AnimationDriver::default();
        d.start();
        d.take_redraw();
        d
    }

    #[test]
    fn starts_stopped_at_zero() {
        let mut d = AnimationDriver::default();
        assert_eq!(d.status(), DriverStatus::Stopped);
        assert!(d.state().is_zero());
        assert_eq!(d.day_label(), "Day: 0");
        assert!(d.take_redraw());
        assert!(!d.take_redraw());
    }

    #[test]
    fn ticks_are_ignored_until_started() {
        let mut d = AnimationDriver::default();
        assert!(!d.tick());
        assert_eq!(d.advance(5.0), 0);
        assert!(d.state().is_zero());
    }

    #[test]
    fn running_tick_steps_and_requests_redraw() {
        let mut d = running();
        assert!(d.tick());
        assert_eq!(d.state().day_count, 1);
        assert!((d.state().planet_angle - 0.05).abs() < 1e-12);
        assert!((d.state().satellite_angle - 0.1).abs() < 1e-12);
        assert_eq!(d.day_label(), "Day: 1");
        assert!(d.take_redraw());
    }

    #[test]
    fn advance_fires_once_per_interval() {
        let mut d = running();
        assert_eq!(d.advance(INTERVAL / 2.0), 0);
        assert!(!d.take_redraw());
        assert_eq!(d.advance(INTERVAL / 2.0), 1);
        for _ in 0..9 {
            d.advance(INTERVAL);
        }
        assert_eq!(d.state().day_count, 10);
    }

    #[test]
    fn stalled_host_gets_a_single_firing() {
        let mut d = running();
        assert_eq!(d.advance(100.0), 1);
        assert_eq!(d.state().day_count, 1);
        // The stall is not replayed on the next frame.
        assert_eq!(d.advance(INTERVAL / 2.0), 0);
        assert_eq!(d.state().day_count, 1);
    }

    #[test]
    fn catch_up_cap_is_configurable() {
        let config = SimConfig {
            max_catch_up_ticks: 10,
            ..SimConfig::default()
        };
        let mut d = AnimationDriver::new(config);
        d.start();
        assert_eq!(d.advance(100.0), 10);
        assert_eq!(d.state().day_count, 10);
    }

    #[test]
    fn pause_freezes_state() {
        let mut d = running();
        d.tick();
        d.tick();
        d.pause();
        assert_eq!(d.status(), DriverStatus::Paused);
        let frozen = d.state();
        d.take_redraw();

        for _ in 0..50 {
            assert_eq!(d.advance(INTERVAL), 0);
            assert!(!d.tick());
        }
        assert_eq!(d.state(), frozen);
        assert!(!d.take_redraw());
    }

    #[test]
    fn start_after_pause_resumes_from_retained_state() {
        let mut d = running();
        d.tick();
        d.tick();
        d.tick();
        d.pause();
        d.advance(10.0);
        d.start();
        assert_eq!(d.status(), DriverStatus::Running);
        d.tick();
        assert_eq!(d.state().day_count, 4);
        assert!((d.state().planet_angle - 0.2).abs() < 1e-12);
    }

    #[test]
    fn resumed_timer_waits_a_full_interval() {
        let mut d = running();
        d.advance(INTERVAL * 0.9);
        d.pause();
        d.start();
        assert_eq!(d.advance(INTERVAL * 0.5), 0);
        assert_eq!(d.state().day_count, 0);
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut once = running();
        let mut twice = running();
        twice.start();

        once.advance(INTERVAL * 0.5);
        twice.advance(INTERVAL * 0.5);
        // A second start must not restart the interval in progress.
        twice.start();
        assert_eq!(once.advance(INTERVAL * 0.5), twice.advance(INTERVAL * 0.5));
        assert_eq!(once.state(), twice.state());
        assert_eq!(once.status(), twice.status());
    }

    #[test]
    fn pause_is_a_no_op_unless_running() {
        let mut d = AnimationDriver::default();
        d.pause();
        assert_eq!(d.status(), DriverStatus::Stopped);
    }

    #[test]
    fn stop_resets_from_every_state() {
        let mut from_running = running();
        from_running.advance(INTERVAL);
        from_running.advance(INTERVAL);

        let mut from_paused = running();
        from_paused.tick();
        from_paused.pause();

        let mut from_stopped = AnimationDriver::default();

        for d in [&mut from_running, &mut from_paused, &mut from_stopped] {
            d.take_redraw();
            d.stop();
            assert_eq!(d.status(), DriverStatus::Stopped);
            assert_eq!(d.state(), OrbitalState::ZERO);
            assert_eq!(d.state().planet_angle, 0.0);
            assert_eq!(d.state().satellite_angle, 0.0);
            assert_eq!(d.day_label(), "Day: 0");
            assert!(d.take_redraw());
            assert!(!d.tick());
        }
    }
}
