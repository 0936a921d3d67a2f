//! Page construction: title, control bar, day label and canvas.

use std::cell::RefCell;
use std::rc::Rc;

use orrery::SimConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, Window};

/// Elements the frame loop needs after the page is built.
pub struct ShellElements {
    pub canvas: HtmlCanvasElement,
    pub day_label: HtmlElement,
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Build the control bar and canvas. Each button runs `on_click` with its own action.
pub fn build_page(
    config: &SimConfig,
    on_click: impl Fn(ShellAction) + Clone + 'static,
) -> Result<ShellElements, JsValue> {
    let document = document()?;
    document.set_title(config.title);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let bar = document.create_element("div")?;
    bar.set_id("orrery-controls");
    for action in [ShellAction::Play, ShellAction::Pause, ShellAction::Stop] {
        let button = document
            .create_element("button")?
            .dyn_into::<HtmlButtonElement>()?;
        button.set_text_content(Some(action.label()));
        let handler = on_click.clone();
        let callback = Closure::<dyn FnMut()>::new(move || handler(action));
        button.set_onclick(Some(callback.as_ref().unchecked_ref()));
        // The page owns the button for the program's lifetime.
        callback.forget();
        bar.append_child(&button)?;
    }

    let day_label = document.create_element("span")?.dyn_into::<HtmlElement>()?;
    day_label.set_id("orrery-day");
    day_label.set_text_content(Some("Day: 0"));
    bar.append_child(&day_label)?;
    body.append_child(&bar)?;

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_id("orrery-canvas");
    canvas.set_width(config.canvas_width);
    canvas.set_height(config.canvas_height);
    body.append_child(&canvas)?;

    Ok(ShellElements { canvas, day_label })
}

/// What a control button asks the driver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Play,
    Pause,
    Stop,
}

impl ShellAction {
    pub fn label(self) -> &'static str {
        match self {
            ShellAction::Play => "Play",
            ShellAction::Pause => "Pause",
            ShellAction::Stop => "Stop",
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drive `on_frame` from `requestAnimationFrame`, passing elapsed seconds.
pub fn start_frame_loop(mut on_frame: impl FnMut(f64) + 'static) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let mut last: Option<f64> = None;

    *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now: f64| {
        let dt = last.map_or(0.0, |prev| (now - prev) / 1000.0);
        last = Some(now);
        on_frame(dt);

        if let Some(cb) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(cb) {
                log::error!("frame loop stopped: {:?}", err);
            }
        }
    }));

    let first = callback.borrow();
    match first.as_ref() {
        Some(cb) => request_animation_frame(cb),
        None => Err(JsValue::from_str("frame callback missing")),
    }
}

fn request_animation_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<(), JsValue> {
    window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}
