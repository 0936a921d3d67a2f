/// Fixed timestep accumulator.
/// Turns variable frame deltas into a whole number of fixed-interval timer firings.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed interval per firing, in seconds.
    dt: f64,
    /// Accumulated time from variable frame deltas.
    accumulator: f64,
    /// Maximum firings released by one `accumulate` call.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f64, max_steps: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        if frame_dt <= 0.0 || !frame_dt.is_finite() {
            return 0;
        }
        self.accumulator += frame_dt;
        // Cap to prevent a burst after the host throttles us
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f64);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f64 * self.dt;
        steps
    }

    /// Drop any partial interval, so the next firing is a full `dt` away.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

}
