use crate::constants::MOBILE_HOOK_NAME;
use crate::core::{Backdrop, Viewport};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Keep the canvas backing store and the backdrop viewport in step with the window.
pub fn wire_resize(canvas: web::HtmlCanvasElement, backdrop: Rc<RefCell<Backdrop>>) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
        let (w, h) = dom::canvas_css_size(&canvas);
        let viewport = Viewport::new(w, h);
        backdrop.borrow_mut().resize(viewport);
        apply_mobile_hint(viewport);
    });
}

/// Call the page's optional `reduceAnimationForMobile` hook on narrow viewports.
pub fn apply_mobile_hint(viewport: Viewport) {
    if !viewport.is_mobile() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let hook = match js_sys::Reflect::get(&window, &JsValue::from_str(MOBILE_HOOK_NAME)) {
        Ok(v) => v,
        Err(_) => return,
    };
    if let Some(f) = hook.dyn_ref::<js_sys::Function>() {
        log::info!("[mobile] width {} <= breakpoint, calling {}", viewport.width, MOBILE_HOOK_NAME);
        if let Err(e) = f.call0(&window) {
            log::warn!("[mobile] {MOBILE_HOOK_NAME} threw: {e:?}");
        }
    }
}
