//! Background color derivation
//!
//! Without an explicit color, the base color's hue is rotated backwards by up
//! to 359 degrees (three nibbles) and its saturation nudged by one nibble,
//! upwards when the nibble is even and downwards when it is odd.

use crate::color::Rgb;
use crate::digest::Fingerprint;
use crate::geometry::remap;
use crate::io::configuration::{HUE_OFFSET_NIBBLE, SATURATION_OFFSET_NIBBLE};
use crate::io::error::{Result, invalid_color};
use crate::pattern::options::GenerateOptions;

/// Resolve the background color for a fingerprint
///
/// # Errors
///
/// Returns `InvalidColor` if the explicit color or the base color is not a
/// hexadecimal color
pub fn derive_background(fingerprint: &Fingerprint, options: &GenerateOptions) -> Result<Rgb> {
    if let Some(color) = &options.color {
        return Rgb::from_hex(color).ok_or_else(|| invalid_color("color", color));
    }

    let base = Rgb::from_hex(&options.base_color)
        .ok_or_else(|| invalid_color("base_color", &options.base_color))?;

    Ok(rotate_base_color(fingerprint, base))
}

/// Rotate hue and shift saturation of `base` by fingerprint nibbles
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn rotate_base_color(fingerprint: &Fingerprint, base: Rgb) -> Rgb {
    let hue_offset = remap(
        f64::from(fingerprint.value(HUE_OFFSET_NIBBLE, 3)),
        0.0,
        4095.0,
        0.0,
        359.0,
    );
    let saturation_offset = fingerprint.nibble(SATURATION_OFFSET_NIBBLE);
    let saturation_shift = f64::from(saturation_offset);

    let mut hsl = base.to_hsl();
    hsl.h = ((hsl.h * 360.0 - hue_offset) + 360.0) % 360.0 / 360.0;
    hsl.s = if saturation_offset.is_multiple_of(2) {
        f64::min(1.0, (hsl.s * 100.0 + saturation_shift) / 100.0)
    } else {
        f64::max(0.0, (hsl.s * 100.0 - saturation_shift) / 100.0)
    };

    let rgb = hsl.to_rgb();
    tracing::trace!(
        hue_offset,
        saturation_offset,
        color = %rgb,
        "rotated base color"
    );
    rgb
}
