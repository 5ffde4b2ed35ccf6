use crate::constants::{ACTIVE_CHANGE_EVENT, MAX_FRAME_DT_SEC};
use crate::dom;
use crate::export;
use crate::input;
use crate::overlay;
use helix_core::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Latest frame published for JS-side renderers.
#[derive(Default)]
pub struct Published {
    pub frame: Vec<f32>,
    pub particles: Vec<f32>,
    pub active_id: Option<String>,
}

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub published: Rc<RefCell<Published>>,
    pub window: web::Window,
    pub document: web::Document,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = input::clamp_frame_dt(dt.as_secs_f32(), MAX_FRAME_DT_SEC);

        let changed = self.scene.borrow_mut().tick(dt_sec);

        let scene = self.scene.borrow();
        let frame = scene.frame();
        {
            let mut out = self.published.borrow_mut();
            export::pack_frame(&mut out.frame, &frame, scene.hovered());
            out.particles.clear();
            out.particles
                .extend(frame.particles.iter().flat_map(|p| p.to_array()));
            if changed {
                out.active_id = frame.active_id.map(str::to_owned);
            }
        }

        if changed {
            let entry = frame.active_index.and_then(|i| frame.entries.get(i));
            match entry {
                Some(e) => log::info!(
                    "[select] active={} index={}",
                    e.id,
                    frame.active_index.unwrap_or_default()
                ),
                None => log::info!("[select] no active item"),
            }
            overlay::show_entry(&self.document, entry);
            dom::dispatch_custom_event(&self.window, ACTIVE_CHANGE_EVENT, frame.active_id);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
