#![cfg(target_arch = "wasm32")]
use helix_core::{total_scroll_height_vh, Catalog, Scene, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod export;
mod frame;
mod input;
mod overlay;

use constants::{CANVAS_ID, SPACER_ID};

thread_local! {
    static PUBLISHED: Rc<RefCell<frame::Published>> = Rc::new(RefCell::new(frame::Published::default()));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("helix-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The canvas belongs to the JS renderer; we only keep its backing size in sync.
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    if canvas.is_none() {
        log::warn!("missing #{CANVAS_ID}, camera aspect follows the window");
    }

    let catalog = Catalog::builtin();
    if catalog.is_empty() {
        return Err(anyhow::anyhow!("catalog is empty"));
    }
    log::info!("[catalog] {} entries", catalog.len());
    dom::set_spacer_height(&document, SPACER_ID, total_scroll_height_vh(catalog.len()));

    let scene = Rc::new(RefCell::new(Scene::new(catalog, SceneConfig::default())));

    events::wire_resize(scene.clone(), canvas);
    events::wire_scroll_handler(scene.clone());
    events::wire_pointer_handlers(scene.clone());
    events::wire_global_keydown(scene.clone());

    // Initial sample so a page restored mid-scroll starts in the right place.
    events::sample_scroll(&window, &scene);
    scene.borrow_mut().tick(0.0);

    let published = PUBLISHED.with(Rc::clone);
    {
        let s = scene.borrow();
        let f = s.frame();
        let entry = f.active_index.and_then(|i| f.entries.get(i));
        overlay::show_entry(&document, entry);
        published.borrow_mut().active_id = f.active_id.map(str::to_owned);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        published,
        window,
        document,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Latest packed frame: a header followed by one record per card.
#[wasm_bindgen]
pub fn frame_buffer() -> js_sys::Float32Array {
    PUBLISHED.with(|p| js_sys::Float32Array::from(p.borrow().frame.as_slice()))
}

/// Floats per header and per card record in [`frame_buffer`].
#[wasm_bindgen]
pub fn frame_layout() -> js_sys::Uint32Array {
    let layout = [export::HEADER_FLOATS as u32, export::CARD_FLOATS as u32];
    js_sys::Uint32Array::from(&layout[..])
}

#[wasm_bindgen]
pub fn particle_buffer() -> js_sys::Float32Array {
    PUBLISHED.with(|p| js_sys::Float32Array::from(p.borrow().particles.as_slice()))
}

#[wasm_bindgen]
pub fn active_item_id() -> Option<String> {
    PUBLISHED.with(|p| p.borrow().active_id.clone())
}
