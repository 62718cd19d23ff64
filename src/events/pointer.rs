use crate::core::Backdrop;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Any press on the page nudges the spin of every live structure.
pub fn wire_click_spin(backdrop: Rc<RefCell<Backdrop>>) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "pointerdown", move |_ev: web::PointerEvent| {
        let mut b = backdrop.borrow_mut();
        b.nudge_spin();
        log::debug!("[input] spin nudged for {} structures", b.structures().len());
    });
}
