//! Stripe and wave generators

use crate::digest::Fingerprint;
use crate::document::number::format_number;
use crate::document::{Attributes, Svg, Transform};
use crate::geometry::{fill_color, fill_opacity, remap};
use crate::pattern::generators::{nibble_value, stroke_style};

const WAVE_COUNT: usize = 36;
const STRIPE_NIBBLES: usize = 36;
const STRIPE_PADDING: f64 = 5.0;

/// Path data for one period and a half of a wave
///
/// The trailing `x, y` pair after the last control point keeps its comma.
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn wave_path(period: f64, amplitude: f64, x_offset: f64) -> String {
    let n = format_number;
    format!(
        "M0 {a} C {x0} 0, {x1} 0, {half} {a} S {x2} {double}, {p} {a} S {x3} 0, {end}, {a}",
        a = n(amplitude),
        x0 = n(x_offset),
        x1 = n(period / 2.0 - x_offset),
        half = n(period / 2.0),
        x2 = n(period - x_offset),
        double = n(amplitude * 2.0),
        p = n(period),
        x3 = n(period * 1.5 - x_offset),
        end = n(period * 1.5),
    )
}

/// Horizontal sine wave strokes, stacked and repeated one tile height lower
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn sine_waves(fingerprint: &Fingerprint, svg: &mut Svg) {
    let period = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 100.0, 400.0).floor();
    let amplitude = remap(nibble_value(fingerprint, 1), 0.0, 15.0, 30.0, 100.0).floor();
    let wave_width = remap(nibble_value(fingerprint, 2), 0.0, 15.0, 3.0, 30.0).floor();

    svg.set_width(period);
    svg.set_height(wave_width * 36.0);

    let x_offset = period / 4.0 * 0.7;
    let data = wave_path(period, amplitude, x_offset);

    for (index, row) in (0..WAVE_COUNT).zip(0_u32..) {
        let styles = stroke_style(fingerprint.nibble(index), wave_width);
        let i = f64::from(row);

        svg.path(&data, &styles).transform(
            &Transform::new().translate(-period / 4.0, wave_width * i - amplitude * 1.5),
        );
        svg.path(&data, &styles).transform(&Transform::new().translate(
            -period / 4.0,
            wave_width * i - amplitude * 1.5 + wave_width * 36.0,
        ));
    }
}

/// Horizontal then vertical stripe bands
///
/// Nibble pairs give the gap before a stripe and the stripe's shade and
/// thickness. The document is sized to the bands once both passes are done.
pub fn plaid(fingerprint: &Fingerprint, svg: &mut Svg) {
    let height = stripes(fingerprint, |offset, thickness, styles| {
        svg.rect(0.0, offset, "100%", thickness, styles);
    });
    let width = stripes(fingerprint, |offset, thickness, styles| {
        svg.rect(offset, 0.0, thickness, "100%", styles);
    });

    svg.set_width(width);
    svg.set_height(height);
}

/// Walk the nibble pairs, handing each stripe's offset, thickness and style
/// to `draw`; returns the total extent
fn stripes(fingerprint: &Fingerprint, mut draw: impl FnMut(f64, f64, &Attributes)) -> f64 {
    let mut extent = 0.0;

    for index in (0..STRIPE_NIBBLES).step_by(2) {
        extent += nibble_value(fingerprint, index) + STRIPE_PADDING;

        let nibble = fingerprint.nibble(index + 1);
        let styles = Attributes::new()
            .with("opacity", fill_opacity(nibble))
            .with("fill", fill_color(nibble));
        let thickness = f64::from(nibble) + STRIPE_PADDING;

        draw(extent, thickness, &styles);
        extent += thickness;
    }

    extent
}
