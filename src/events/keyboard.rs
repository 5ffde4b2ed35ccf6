use crate::dom;
use crate::input;
use crate::overlay;
use helix_core::{offset_for_progress, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<Scene>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    if let Some(step) = input::nav_step_for_key(&key) {
        let Some(window) = web::window() else {
            return;
        };
        let (_, max_offset) = dom::scroll_metrics(&window);
        let target = scene.borrow().neighbor_progress(step);
        if let Some(progress) = target {
            let offset = offset_for_progress(progress, max_offset);
            log::info!("[keys] step {step:+} -> progress {progress:.3}");
            dom::smooth_scroll_to(&window, offset);
            ev.prevent_default();
        }
        return;
    }
    if key == "h" || key == "H" {
        if let Some(document) = dom::window_document() {
            overlay::toggle(&document);
        }
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(scene: Rc<RefCell<Scene>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
