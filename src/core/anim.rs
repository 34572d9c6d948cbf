use super::constants::{HERO_FADE_RANGE, HERO_SCROLL_CUTOFF, HERO_SHIFT_FACTOR};

/// Ease-out quartic: fast start, long settle.
#[inline]
pub fn ease_out_quart(p: f64) -> f64 {
    let q = 1.0 - p.clamp(0.0, 1.0);
    1.0 - q * q * q * q
}

/// Displayed value of a count-up animation at `elapsed_ms`. While running the
/// eased interpolation is floored to a whole number; once the duration has
/// elapsed the exact target is returned so the counter never ends off by one.
#[inline]
pub fn counter_value(target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    let progress = (elapsed_ms / duration_ms).min(1.0);
    if progress >= 1.0 {
        target
    } else {
        (target * ease_out_quart(progress)).floor()
    }
}

#[inline]
pub fn counter_done(elapsed_ms: f64, duration_ms: f64) -> bool {
    elapsed_ms >= duration_ms
}

/// Hero parallax mapping: horizontal shift in px and opacity for the split
/// hero panels at a given scroll offset. Inert past the cutoff.
#[inline]
pub fn hero_shift(scroll_y: f64) -> Option<(f64, f64)> {
    if scroll_y >= HERO_SCROLL_CUTOFF {
        return None;
    }
    let shift = scroll_y * HERO_SHIFT_FACTOR;
    let opacity = 1.0 - scroll_y / HERO_FADE_RANGE;
    Some((shift, opacity))
}
