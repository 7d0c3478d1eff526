// Shared simulation tuning constants used by both web and native frontends.
//
// Per-frame rates are expressed per simulation step; the hosts run exactly one
// step per rendered frame.

// Field construction defaults
pub const DEFAULT_DOT_COUNT: usize = 1600;
pub const COMPACT_DOT_COUNT: usize = 800; // narrow viewports
pub const DEFAULT_RADIUS: f32 = 2.0;

// Fractional part of the golden ratio, drives the lattice azimuth
pub const GOLDEN_RATIO_FRACTION: f64 = 0.618_033_988_749_895;

// Exclusion zone
pub const CURSOR_RADIUS_FACTOR: f32 = 0.38; // exclusion radius as a fraction of sphere radius
pub const SOFT_BAND_WIDTH: f32 = 0.18; // world units beyond the exclusion radius
pub const SOFT_EASE: f32 = 0.18; // fraction of the way to the boundary per frame in the band

// Cursor path sampling
pub const PATH_STEPS: usize = 12; // PATH_STEPS + 1 samples per frame
pub const MAX_KICKS_PER_STEP: u8 = 2;

// Kick response
pub const FORCE_DIVISOR: f32 = 5.0; // screen px per frame -> force
pub const KICK_FORCE_THRESHOLD: f32 = 0.5;
pub const KICK_FORCE_KNEE: f32 = 1.0;
pub const KICK_GAIN: f32 = 0.7;
pub const KICK_EXPONENT: f32 = 1.15;
pub const KICK_MAX_FACTOR: f32 = 0.7; // cap as a fraction of sphere radius
pub const KICK_STEP: f32 = 0.035; // kick progress per frame

// Hold and return
pub const HOLD_TIME: f32 = 0.4;
pub const HOLD_STEP: f32 = 0.017; // timer decrement per frame
pub const RETURN_RATE: f32 = 0.03; // fraction of the offset removed per frame at rest

// Radial wave morph (time in milliseconds)
pub const WAVE1_SPEED: f64 = 0.002;
pub const WAVE2_SPEED: f64 = 0.001;
pub const WAVE_AMPLITUDE_FACTOR: f32 = 0.15; // amplitude as a fraction of sphere radius
pub const MORPH_EASE: f32 = 0.05;

// Colour blink
pub const BLINK_RATE: f64 = 0.01;
pub const DOT_BLUE: [f32; 3] = [0.2, 0.45, 1.0];
pub const DOT_WHITE: [f32; 3] = [1.0, 1.0, 1.0];

// Pointer fallback when the ray misses the sphere (world units along the ray)
pub const FALLBACK_RAY_DISTANCE: f32 = 5.0;

// Host scene defaults
pub const CAMERA_Z: f32 = 6.0;
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = 0.15;
pub const DOT_SIZE: f32 = 0.008; // sprite half-size in NDC units before aspect correction
pub const COMPACT_VIEWPORT_MAX_CSS_WIDTH: f64 = 768.0;
