use crate::constants::NAVBAR_ID;
use crate::constants::NAV_SCROLLED_CLASS;
use crate::dom;
use helix_core::{nav_scrolled, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Read the page's scroll position and feed it to the scene.
pub fn sample_scroll(window: &web::Window, scene: &Rc<RefCell<Scene>>) {
    let (offset, max_offset) = dom::scroll_metrics(window);
    scene.borrow_mut().on_scroll(offset, max_offset);
    if let Some(document) = window.document() {
        dom::toggle_class(&document, NAVBAR_ID, NAV_SCROLLED_CLASS, nav_scrolled(offset));
    }
}

pub fn wire_scroll_handler(scene: Rc<RefCell<Scene>>) {
    let Some(window) = web::window() else {
        return;
    };
    let window_cb = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        sample_scroll(&window_cb, &scene);
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[scroll] listener not attached: {:?}", e);
    }
    closure.forget();
}
