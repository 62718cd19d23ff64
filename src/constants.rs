// Page wiring and rendering constants for the web frontend.
// Animation tuning lives in `backdrop_core::constants`.

// Element ids and selectors
pub const CANVAS_ID: &str = "backdrop-canvas";
pub const NAV_LINK_SELECTOR: &str = ".nav-bar a";
pub const CONTENT_SELECTOR: &str = ".content";
pub const SECTION_SELECTOR: &str = ".content-section";
pub const ACTIVE_CLASS: &str = "active";

// Optional page hook called for narrow viewports
pub const MOBILE_HOOK_NAME: &str = "reduceAnimationForMobile";

// Content pulse on navigation
pub const NAV_PULSE_SCALE: &str = "scale(0.95)";
pub const NAV_REST_SCALE: &str = "scale(1)";
pub const NAV_PULSE_MS: i32 = 150;

// Trail fade: translucent background drawn over the previous frame
pub const TRAIL_RGB: [f32; 3] = [10.0 / 255.0, 24.0 / 255.0, 48.0 / 255.0];
pub const TRAIL_ALPHA: f32 = 20.0 / 255.0;

// Outline stroke
pub const OUTLINE_ALPHA: f32 = 15.0 / 255.0;

// Each box is lit by an ambient light of half its own fill color
pub const AMBIENT_TINT: f32 = 0.5;

// Opaque clear used for a fresh scene target before trails accumulate
pub const SCENE_CLEAR_RGBA: [f64; 4] = [10.0 / 255.0, 24.0 / 255.0, 48.0 / 255.0, 1.0];

// Initial instance buffer capacity; grows if the pool outruns it
pub const INSTANCE_CAPACITY: usize = 320;
