use orrery::{AnimationDriver, OrbitRenderer, SimConfig, Surface};

/// Wires the driver, the offscreen renderer and a presentation surface into
/// one frame loop.
///
/// The browser shell keeps a single runner in a `thread_local!` and forwards
/// button clicks and animation frames to it. The runner itself has no web
/// dependency, so the loop can be exercised with an in-memory surface.
pub struct SimRunner<S: Surface> {
    driver: AnimationDriver,
    renderer: OrbitRenderer,
    surface: S,
    /// Canvas size the last frame was composed for.
    last_size: (u32, u32),
}

impl<S: Surface> SimRunner<S> {
    pub fn new(config: SimConfig, surface: S) -> Self {
        log::info!("runner: presenting through {}", surface.backend());
        Self {
            driver: AnimationDriver::new(config.clone()),
            renderer: OrbitRenderer::new(config),
            surface,
            last_size: (0, 0),
        }
    }

    pub fn play(&mut self) {
        self.driver.start();
    }

    pub fn pause(&mut self) {
        self.driver.pause();
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    /// Run one host frame: advance the timer, then repaint if anything
    /// changed. Returns the new label text when a frame was presented.
    pub fn frame(&mut self, dt: f64) -> Result<Option<String>, S::Error> {
        self.driver.advance(dt);

        let size = self.surface.size();
        if size != self.last_size {
            self.last_size = size;
            self.driver.request_redraw();
        }

        if !self.driver.take_redraw() {
            return Ok(None);
        }

        let state = self.driver.state();
        if let Some(frame) = self.renderer.render(size.0, size.1, &state) {
            self.surface.present(frame)?;
        }
        Ok(Some(self.driver.day_label()))
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery::FrameBuffer;

    /// Keeps the last blitted frame in memory.
    struct MemorySurface {
        width: u32,
        height: u32,
        blits: u32,
        last: Vec<u8>,
        fail: bool,
    }

    impl MemorySurface {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                blits: 0,
                last: Vec::new(),
                fail: false,
            }
        }
    }

    impl Surface for MemorySurface {
        type Error = String;

        fn backend(&self) -> &'static str {
            "memory"
        }

        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn present(&mut self, frame: &FrameBuffer) -> Result<(), String> {
            if self.fail {
                return Err("surface lost".to_string());
            }
            self.blits += 1;
            self.last = frame.as_bytes().to_vec();
            Ok(())
        }
    }

    fn runner() -> SimRunner<MemorySurface> {
        SimRunner::new(SimConfig::default(), MemorySurface::new(800, 600))
    }

    #[test]
    fn first_frame_paints_initial_scene() {
        let mut r = runner();
        let label = r.frame(0.0).unwrap();
        assert_eq!(label.as_deref(), Some("Day: 0"));
        assert_eq!(r.surface.blits, 1);
        assert_eq!(r.surface.last.len(), 800 * 600 * 4);
    }

    #[test]
    fn idle_frames_do_not_repaint() {
        let mut r = runner();
        r.frame(0.0).unwrap();
        for _ in 0..10 {
            assert_eq!(r.frame(0.1).unwrap(), None);
        }
        assert_eq!(r.surface.blits, 1);
    }

    #[test]
    fn play_repaints_once_per_frame_with_ticks() {
        let mut r = runner();
        r.frame(0.0).unwrap();
        r.play();
        assert_eq!(r.frame(0.05).unwrap(), None);
        assert_eq!(r.frame(0.05).unwrap().as_deref(), Some("Day: 1"));
        // A late host frame yields one firing and one blit.
        assert_eq!(r.frame(0.25).unwrap().as_deref(), Some("Day: 2"));
        assert_eq!(r.surface.blits, 3);
    }

    #[test]
    fn pause_then_stop_resets_label() {
        let mut r = runner();
        r.play();
        assert_eq!(r.frame(0.1).unwrap().as_deref(), Some("Day: 1"));
        r.pause();
        assert_eq!(r.frame(1.0).unwrap(), None);
        assert_eq!(r.driver().state().day_count, 1);
        r.stop();
        assert_eq!(r.frame(0.0).unwrap().as_deref(), Some("Day: 0"));
        assert!(r.driver().state().is_zero());
    }

    #[test]
    fn resize_triggers_repaint_at_new_size() {
        let mut r = runner();
        r.frame(0.0).unwrap();
        r.surface_mut().width = 400;
        r.surface_mut().height = 300;
        assert!(r.frame(0.0).unwrap().is_some());
        assert_eq!(r.surface.last.len(), 400 * 300 * 4);
    }

    #[test]
    fn zero_sized_canvas_skips_present() {
        let mut r = SimRunner::new(SimConfig::default(), MemorySurface::new(0, 0));
        r.play();
        r.frame(0.1).unwrap();
        assert_eq!(r.surface.blits, 0);
        assert_eq!(r.driver().state().day_count, 1);
    }

    #[test]
    fn present_failure_propagates() {
        let mut r = runner();
        r.surface_mut().fail = true;
        assert_eq!(r.frame(0.0), Err("surface lost".to_string()));
    }
}
