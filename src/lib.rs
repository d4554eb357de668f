mod burst;
mod color;
pub mod config;
mod particle;
pub mod page;
mod renderer;
mod show;
mod utils;

pub use crate::burst::{Burst, BurstState};
pub use crate::color::Color;
pub use crate::config::{FireworksConfig, PageConfig};
pub use crate::particle::Particle;
pub use crate::renderer::{CanvasSurface, Surface};
pub use crate::show::{FireworksShow, Tick};

use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlCanvasElement, Window};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Runs the welcome page fireworks if the page has a `#fireworks` canvas.
#[wasm_bindgen]
pub fn start_fireworks() -> Result<(), JsValue> {
    launch(FireworksConfig::default(), PageConfig::default())
}

pub fn launch(config: FireworksConfig, page_config: PageConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let canvas = match document.get_element_by_id(&page_config.canvas_id) {
        Some(element) => element.dyn_into::<HtmlCanvasElement>()?,
        None => return Ok(()),
    };

    page::fit_to_viewport(&window, &canvas)?;
    watch_resize(&window, canvas.clone())?;
    let surface = CanvasSurface::new(canvas)?;
    let show = FireworksShow::new(config, rand::thread_rng(), js_sys::Date::now());
    run(window, document, page_config, show, surface)
}

// Resizing only touches the canvas, bursts already in flight keep their coordinates
fn watch_resize(window: &Window, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let resize_window = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        if let Err(err) = page::fit_to_viewport(&resize_window, &canvas) {
            console::error_1(&err);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn run<R: Rng + 'static>(
    window: Window,
    document: Document,
    page_config: PageConfig,
    mut show: FireworksShow<R>,
    mut surface: CanvasSurface,
) -> Result<(), JsValue> {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let first_frame = frame.clone();
    let frame_window = window.clone();

    *first_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        #[cfg(feature = "frame-timing")]
        let _timer = Timer::new("fireworks frame");

        let keep_going = show
            .tick(js_sys::Date::now(), &mut surface)
            .and_then(|tick| match tick {
                Tick::Continue => request_frame(&frame_window, &frame).map(|_| true),
                Tick::Finished => page::restore(&frame_window, &document, &page_config).map(|_| false),
                Tick::Stopped => Ok(false),
            });

        match keep_going {
            Ok(true) => {}
            Ok(false) => {
                // Drop our own closure, and the show with it
                let _ = frame.borrow_mut().take();
            }
            Err(err) => {
                // A broken show still hands the page back
                console::error_1(&err);
                surface.clear();
                if let Err(err) = page::restore(&frame_window, &document, &page_config) {
                    console::error_1(&err);
                }
                let _ = frame.borrow_mut().take();
            }
        }
    }) as Box<dyn FnMut()>));

    request_frame(&window, &first_frame)
}

fn request_frame(window: &Window, frame: &FrameCallback) -> Result<(), JsValue> {
    if let Some(callback) = frame.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
