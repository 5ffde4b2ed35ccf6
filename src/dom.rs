use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current scroll offset and scrollable range (document height minus viewport).
pub fn scroll_metrics(window: &web::Window) -> (f64, f64) {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let doc_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    (offset, doc_height - viewport)
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

pub fn smooth_scroll_to(window: &web::Window, offset: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(offset);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn set_spacer_height(document: &web::Document, element_id: &str, height_vh: u32) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            _ = el.set_attribute("style", &format!("height:{height_vh}vh"));
        }
        None => log::warn!("[dom] missing #{element_id}, page height left to the template"),
    }
}

pub fn toggle_class(document: &web::Document, element_id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().toggle_with_force(class, on);
    }
}

/// Fire a `CustomEvent` on the window carrying `detail` (null when `None`).
pub fn dispatch_custom_event(window: &web::Window, name: &str, detail: Option<&str>) {
    let init = web::CustomEventInit::new();
    let detail = detail.map_or(JsValue::NULL, JsValue::from_str);
    init.set_detail(&detail);
    match web::CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(ev) => {
            _ = window.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[dom] {name} event error: {:?}", e),
    }
}
