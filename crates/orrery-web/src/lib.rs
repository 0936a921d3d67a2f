pub mod runner;
pub mod shell;
pub mod surface;

pub use runner::SimRunner;
pub use surface::CanvasSurface;

use std::cell::RefCell;

use orrery::SimConfig;
use shell::ShellAction;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner<CanvasSurface>>> = RefCell::new(None);
}

/// Run `f` against the page's runner. `None` before `orrery_start` has run.
fn with_runner<R>(f: impl FnOnce(&mut SimRunner<CanvasSurface>) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn dispatch(action: ShellAction) {
    let handled = with_runner(|r| match action {
        ShellAction::Play => r.play(),
        ShellAction::Pause => r.pause(),
        ShellAction::Stop => r.stop(),
    });
    if handled.is_none() {
        log::warn!("{:?} ignored: simulation not initialized", action);
    }
}

/// Build the page and start the frame loop. Runs when the module loads.
#[wasm_bindgen(start)]
pub fn orrery_start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = SimConfig::default();
    let elements = shell::build_page(&config, dispatch)?;
    let surface = CanvasSurface::new(elements.canvas)?;
    let runner = SimRunner::new(config, surface);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    let label = elements.day_label;
    shell::start_frame_loop(move |dt| {
        let result = with_runner(|r| {
            r.surface_mut().sync_to_layout();
            r.frame(dt)
        });
        match result {
            Some(Ok(Some(text))) => label.set_text_content(Some(&text)),
            Some(Err(err)) => log::error!("present failed: {:?}", err),
            Some(Ok(None)) | None => {}
        }
    })?;

    log::info!("orrery: initialized");
    Ok(())
}

// ---- Controls for a host script ----

#[wasm_bindgen]
pub fn orrery_play() {
    dispatch(ShellAction::Play);
}

#[wasm_bindgen]
pub fn orrery_pause() {
    dispatch(ShellAction::Pause);
}

#[wasm_bindgen]
pub fn orrery_stop() {
    dispatch(ShellAction::Stop);
}

/// Days elapsed, or 0 before the page has been built.
#[wasm_bindgen]
pub fn orrery_day_count() -> u64 {
    with_runner(|r| r.driver().state().day_count).unwrap_or(0)
}
