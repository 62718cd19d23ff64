#![cfg(target_arch = "wasm32")]
use crate::core::{AnimationParams, Backdrop, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod nav;
mod render;
mod sections;

thread_local! {
    // Live backdrop, reachable from the exported page hooks
    static BACKDROP: RefCell<Option<Rc<RefCell<Backdrop>>>> = const { RefCell::new(None) };
}

fn with_backdrop(f: impl FnOnce(&mut Backdrop)) {
    let backdrop = BACKDROP.with(|slot| slot.borrow().clone());
    match backdrop {
        Some(b) => f(&mut b.borrow_mut()),
        None => log::debug!("backdrop not ready yet"),
    }
}

/// Regenerate the palette now. Exposed to page scripts as `refreshColors()`.
#[wasm_bindgen(js_name = refreshColors)]
pub fn refresh_colors() {
    with_backdrop(|b| {
        b.refresh_palette();
        log::info!("[palette] refreshed on request, {} structures", b.structures().len());
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let (css_w, css_h) = dom::canvas_css_size(&canvas);
    let viewport = Viewport::new(css_w, css_h);

    let seed: u64 = rand::random();
    let backdrop = Backdrop::new(AnimationParams::default(), seed, viewport)
        .map_err(|e| anyhow::anyhow!("backdrop params: {e}"))?;
    let backdrop = Rc::new(RefCell::new(backdrop));
    BACKDROP.with(|slot| *slot.borrow_mut() = Some(backdrop.clone()));
    log::info!(
        "[backdrop] seed={seed:#018x} viewport={:.0}x{:.0}",
        viewport.width,
        viewport.height
    );

    events::apply_mobile_hint(viewport);
    events::wire_resize(canvas.clone(), backdrop.clone());
    events::wire_click_spin(backdrop.clone());
    nav::wire_navigation(&document, refresh_colors);

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        backdrop,
        canvas,
        gpu,
        start: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
