pub mod pointer;
pub mod resize;

pub use pointer::wire_click_spin;
pub use resize::{apply_mobile_hint, wire_resize};
