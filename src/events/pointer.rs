use crate::dom;
use crate::input;
use helix_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(scene: Rc<RefCell<Scene>>) {
    let Some(window) = web::window() else {
        return;
    };
    let window_cb = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (w, h) = dom::viewport_size(&window_cb);
        let [x, y] =
            input::normalized_pointer(f64::from(ev.client_x()), f64::from(ev.client_y()), w, h);
        scene.borrow_mut().on_pointer(x, y);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the canvas backing store and the camera aspect in step with the viewport.
pub fn wire_resize(scene: Rc<RefCell<Scene>>, canvas: Option<web::HtmlCanvasElement>) {
    let Some(window) = web::window() else {
        return;
    };
    let window_cb = window.clone();
    let apply = move || {
        let (w, h) = dom::viewport_size(&window_cb);
        if let Some(c) = &canvas {
            dom::sync_canvas_backing_size(c);
        }
        scene.borrow_mut().set_aspect(input::aspect_ratio(w, h));
    };
    apply();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(apply) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
