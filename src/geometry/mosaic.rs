//! Composite mosaic tiles built from reflected right triangles
//!
//! Each tile is four copies of one right triangle, placed with a translate and
//! a reflecting scale so they meet along the tile's diagonals.

use crate::document::{Attributes, Svg, Transform};
use crate::geometry::mapping::{fill_color, fill_opacity};
use crate::geometry::shapes::build_right_triangle_shape;
use crate::io::configuration::{STROKE_COLOR, STROKE_OPACITY};

fn mosaic_style(nibble: u8) -> Attributes {
    Attributes::new()
        .with("stroke", STROKE_COLOR)
        .with("stroke-opacity", STROKE_OPACITY)
        .with("fill-opacity", fill_opacity(nibble))
        .with("fill", fill_color(nibble))
}

/// Draw a tile whose triangles point inward, shaded by two nibbles
///
/// The first nibble shades the left pair, the second the right pair.
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn draw_inner_mosaic_tile(
    svg: &mut Svg,
    x: f64,
    y: f64,
    triangle_size: f64,
    nibbles: [u8; 2],
) {
    let triangle = build_right_triangle_shape(triangle_size);
    let [first, second] = nibbles;

    let left = mosaic_style(first);
    svg.polyline(&triangle, &left).transform(
        &Transform::new()
            .translate(x + triangle_size, y)
            .scale(-1.0, 1.0),
    );
    svg.polyline(&triangle, &left).transform(
        &Transform::new()
            .translate(x + triangle_size, y + triangle_size * 2.0)
            .scale(1.0, -1.0),
    );

    let right = mosaic_style(second);
    svg.polyline(&triangle, &right).transform(
        &Transform::new()
            .translate(x + triangle_size, y + triangle_size * 2.0)
            .scale(-1.0, -1.0),
    );
    svg.polyline(&triangle, &right).transform(
        &Transform::new()
            .translate(x + triangle_size, y)
            .scale(1.0, 1.0),
    );
}

/// Draw a tile whose triangles point outward, shaded by one nibble
#[allow(clippy::suboptimal_flops)]
pub fn draw_outer_mosaic_tile(svg: &mut Svg, x: f64, y: f64, triangle_size: f64, nibble: u8) {
    let triangle = build_right_triangle_shape(triangle_size);
    let styles = mosaic_style(nibble);

    svg.polyline(&triangle, &styles).transform(
        &Transform::new()
            .translate(x, y + triangle_size)
            .scale(1.0, -1.0),
    );
    svg.polyline(&triangle, &styles).transform(
        &Transform::new()
            .translate(x + triangle_size * 2.0, y + triangle_size)
            .scale(-1.0, -1.0),
    );
    svg.polyline(&triangle, &styles).transform(
        &Transform::new()
            .translate(x, y + triangle_size)
            .scale(1.0, 1.0),
    );
    svg.polyline(&triangle, &styles).transform(
        &Transform::new()
            .translate(x + triangle_size * 2.0, y + triangle_size)
            .scale(-1.0, 1.0),
    );
}
