// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn population_constants_are_consistent() {
    assert!(NARROW_VIEWPORT_PX > 0.0);
    assert!(PARTICLES_NARROW > 0);
    assert!(PARTICLES_WIDE > PARTICLES_NARROW);
    // The pairwise line pass is O(n^2); keep the population small enough
    // that a frame stays cheap.
    assert!(PARTICLES_WIDE <= 200);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spawn_ranges_are_sane() {
    assert!(VELOCITY_SPREAD > 0.0);
    assert!(RADIUS_MIN >= 1.0);
    assert!(RADIUS_SPAN > 0.0);
    assert!(RADIUS_MIN + RADIUS_SPAN <= 4.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_distances_nest_correctly() {
    // Lines vanish before repulsion does; both are well inside a viewport.
    assert!(LINK_DISTANCE < REPULSE_RADIUS);
    assert!(REPULSE_RADIUS < NARROW_VIEWPORT_PX);
    assert!(REPULSE_DIVISOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn link_styling_is_subtle() {
    assert!(LINK_LINE_WIDTH > 0.0 && LINK_LINE_WIDTH < 1.0);
    assert!(LINK_ALPHA_BASE_DARK > 0.0 && LINK_ALPHA_BASE_DARK < 1.0);
    assert!(LINK_ALPHA_BASE_LIGHT > 0.0 && LINK_ALPHA_BASE_LIGHT < 1.0);
    // Light backgrounds need slightly stronger lines to stay visible.
    assert!(LINK_ALPHA_BASE_LIGHT > LINK_ALPHA_BASE_DARK);
    assert!(LINK_ALPHA_FALLOFF > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(SKILL_COUNT_MS > 0.0);
    assert!(EXP_COUNT_MS > 0.0);
    assert!(EXP_COUNT_MS < SKILL_COUNT_MS);
    assert!(ICON_SWAP_DELAY_MS > 0);
    assert!(LIGHTBOX_SHOW_DELAY_MS > 0);
    assert!(LIGHTBOX_FADE_MS > LIGHTBOX_SHOW_DELAY_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_and_parallax_bounds() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(HERO_SCROLL_CUTOFF > 0.0);
    assert!(HERO_FADE_RANGE > 0.0);
    assert!(HERO_FADE_RANGE <= HERO_SCROLL_CUTOFF);
    assert!(HERO_SHIFT_FACTOR > 0.0 && HERO_SHIFT_FACTOR <= 1.0);
}
