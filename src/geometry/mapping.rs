//! Value mapping from fingerprint nibbles to sizes, fills and opacities

use crate::io::configuration::{FILL_COLOR_DARK, FILL_COLOR_LIGHT, OPACITY_MAX, OPACITY_MIN};
use num_traits::Float;

/// Re-map `value` from `[src_min, src_max]` onto `[dst_min, dst_max]`
///
/// Linear and unclamped. Requires `src_min != src_max`; an empty source range
/// yields a non-finite result.
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn remap<T: Float>(value: T, src_min: T, src_max: T, dst_min: T, dst_max: T) -> T {
    let src_range = src_max - src_min;
    let dst_range = dst_max - dst_min;

    (value - src_min) * dst_range / src_range + dst_min
}

/// Light fill for even nibbles, dark fill for odd ones
pub const fn fill_color(nibble: u8) -> &'static str {
    if nibble.is_multiple_of(2) {
        FILL_COLOR_LIGHT
    } else {
        FILL_COLOR_DARK
    }
}

/// Opacity for a nibble in 0..=15, spread linearly over the opacity band
///
/// Values above 15 extrapolate past the band.
pub fn fill_opacity(nibble: u8) -> f64 {
    remap(f64::from(nibble), 0.0, 15.0, OPACITY_MIN, OPACITY_MAX)
}
