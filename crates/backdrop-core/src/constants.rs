// Animation tuning constants shared by the core and the web frontend.

// Pool and scheduling
pub const SPAWN_INTERVAL_FRAMES: u64 = 2; // scheduled spawn every N frames
pub const MAX_STRUCTURES: usize = 300; // hard cap on live structures
pub const INITIAL_STRUCTURES: usize = 30; // spawned at startup after the first palette
pub const PALETTE_SPAWN_COUNT: usize = 2; // extra spawns on every palette refresh
pub const PALETTE_REFRESH_MS: f64 = 6000.0; // timed palette regeneration
pub const NOISE_OFFSET_STEP: f64 = 0.01; // spawn-position noise advance per frame

// Structure lifecycle
pub const FADE_DURATION_FRAMES: u32 = 750; // age after which fade-out starts
pub const RETARGET_EVERY_FRAMES: u32 = 200; // color retarget cadence
pub const ALPHA_MAX: f32 = 180.0;
pub const FADE_IN_STEP: f32 = 2.0;
pub const FADE_OUT_STEP: f32 = 1.5;
pub const COLOR_EASE_PROGRESS: f32 = 0.01;
pub const NOISE_VALUE_STEP: f32 = 0.01; // per-structure noise advance per update

// Structure sizing (width/depth share a range)
pub const FOOTPRINT_MIN: f32 = 30.0;
pub const FOOTPRINT_MAX: f32 = 250.0;
pub const HEIGHT_MIN: f32 = 30.0;
pub const HEIGHT_MAX: f32 = 180.0;
pub const SPAWN_SPREAD_X: f32 = 1.5; // spawn window is this many viewport widths each side

// Per-instance animation ranges
pub const ROTATION_SPEED_MIN: f32 = 0.0002;
pub const ROTATION_SPEED_MAX: f32 = 0.003;
pub const SCALE_FACTOR_MIN: f32 = 0.1;
pub const SCALE_FACTOR_MAX: f32 = 1.1;
pub const PULSE_RATE_MIN: f32 = 0.01;
pub const PULSE_RATE_MAX: f32 = 0.03;
pub const PULSE_AMPLITUDE: f32 = 0.05;
pub const NOISE_SEED_MAX: f32 = 100.0;

// Click interaction
pub const CLICK_SPIN_MIN: f32 = 0.8;
pub const CLICK_SPIN_MAX: f32 = 1.2;

// Palette generation
pub const PALETTE_GENERATED: usize = 5;
pub const PALETTE_LEN: usize = 10;
pub const PALETTE_HUE_STEP: f32 = 72.0;
pub const PALETTE_ALPHA: f32 = 200.0;
pub const SATURATION_RANGE: (f32, f32) = (60.0, 90.0);
pub const LIGHTNESS_RANGE: (f32, f32) = (40.0, 70.0);
pub const ACCENT_COLORS: [[f32; 3]; 5] = [
    [20.0, 120.0, 240.0],  // blue
    [240.0, 100.0, 120.0], // pink
    [70.0, 210.0, 180.0],  // teal
    [240.0, 180.0, 20.0],  // gold
    [180.0, 90.0, 240.0],  // purple
];

// Color selection
pub const SYNTH_COLOR_CHANCE: f64 = 0.2;
pub const COLOR_JITTER: f32 = 25.0;
pub const CHANNEL_FLOOR: f32 = 20.0;
pub const COLOR_ALPHA_MIN: f32 = 180.0;
pub const COLOR_ALPHA_MAX: f32 = 220.0;
pub const NEAR_WHITE_PICK: f32 = 200.0; // guard threshold when picking from the palette
pub const NEAR_WHITE_DRAW: f32 = 230.0; // guard threshold at draw time

// Viewport
pub const MOBILE_MAX_WIDTH: f32 = 768.0;
