/// Particle field and animation tuning constants.
///
/// These express intended behavior (counts, distance thresholds, easing
/// durations) and keep magic numbers out of the code.
// Particle population by viewport width
pub const NARROW_VIEWPORT_PX: f32 = 600.0;
pub const PARTICLES_NARROW: usize = 50;
pub const PARTICLES_WIDE: usize = 120;

// Spawn ranges
pub const VELOCITY_SPREAD: f32 = 1.5; // per-axis velocity in [-spread/2, spread/2]
pub const RADIUS_MIN: f32 = 1.0;
pub const RADIUS_SPAN: f32 = 3.0;

// Pointer repulsion
pub const REPULSE_RADIUS: f32 = 150.0;
pub const REPULSE_DIVISOR: f32 = 20.0; // push = (radius - dist) / divisor

// Connecting lines
pub const LINK_DISTANCE: f32 = 110.0;
pub const LINK_LINE_WIDTH: f64 = 0.6;
pub const LINK_ALPHA_BASE_DARK: f32 = 0.08;
pub const LINK_ALPHA_BASE_LIGHT: f32 = 0.12;
pub const LINK_ALPHA_FALLOFF: f32 = 1.0 / 1000.0; // alpha lost per px of distance

// Count-up animations (milliseconds)
pub const SKILL_COUNT_MS: f64 = 1500.0; // synced with the 1.5s CSS transition
pub const EXP_COUNT_MS: f64 = 800.0;

// Hero parallax
pub const HERO_SCROLL_CUTOFF: f64 = 600.0;
pub const HERO_SHIFT_FACTOR: f64 = 0.5;
pub const HERO_FADE_RANGE: f64 = 500.0;

// Reveal observer
pub const REVEAL_THRESHOLD: f64 = 0.1;

// UI transition delays (milliseconds)
pub const ICON_SWAP_DELAY_MS: i32 = 200;
pub const LIGHTBOX_SHOW_DELAY_MS: i32 = 10;
pub const LIGHTBOX_FADE_MS: i32 = 300;
