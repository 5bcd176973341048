//! Plus sign based generators

use crate::digest::Fingerprint;
use crate::document::{Attributes, Svg, Transform};
use crate::geometry::shapes::build_plus_shape;
use crate::geometry::{fill_color, fill_opacity, remap};
use crate::io::configuration::{STROKE_COLOR, STROKE_OPACITY};
use crate::pattern::generators::{cells, nibble_value, solid_style};

/// Interlocking plus signs, every odd row shifted by one bar width
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn plus_signs(fingerprint: &Fingerprint, svg: &mut Svg) {
    let square_size = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 10.0, 25.0);
    let plus_size = square_size * 3.0;
    let plus_shape = build_plus_shape(square_size);
    let unstyled = Attributes::new();

    svg.set_width(square_size * 12.0);
    svg.set_height(square_size * 12.0);

    for cell in cells(6, 6) {
        let nibble = fingerprint.nibble(cell.index);
        let styles = Attributes::new()
            .with("fill", fill_color(nibble))
            .with("stroke", STROKE_COLOR)
            .with("stroke-opacity", STROKE_OPACITY)
            .with("fill-opacity", fill_opacity(nibble));

        let (x, y) = (cell.x(), cell.y());
        let dx = if cell.row.is_multiple_of(2) { 0.0 } else { 1.0 };

        let left = x * plus_size - x * square_size + dx * square_size - square_size;
        let right = 4.0 * plus_size - x * square_size + dx * square_size - square_size;
        let top = y * plus_size - y * square_size - plus_size / 2.0;
        let bottom = 4.0 * plus_size - y * square_size - plus_size / 2.0;

        let mut place = |tx: f64, ty: f64| {
            svg.group(&styles)
                .transform(&Transform::new().translate(tx, ty))
                .rects(&plus_shape, &unstyled)
                .end();
        };

        place(left, top);

        if cell.is_first_column() {
            place(right, top);
        }

        if cell.is_first_row() {
            place(left, bottom);
        }

        if cell.is_origin() {
            place(right, bottom);
        }
    }
}

/// Plus signs rotated by 45 degrees into crosses
///
/// Crosses in the last row hang off the bottom edge, so that row is repeated
/// above the top edge as well.
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn xes(fingerprint: &Fingerprint, svg: &mut Svg) {
    let square_size = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 10.0, 25.0);
    let x_shape = build_plus_shape(square_size);
    let x_size = square_size * 3.0 * 0.943;
    let unstyled = Attributes::new();

    svg.set_width(x_size * 3.0);
    svg.set_height(x_size * 3.0);

    for cell in cells(6, 6) {
        let styles = solid_style(fingerprint.nibble(cell.index));
        let (x, y) = (cell.x(), cell.y());
        let odd_column = !cell.column.is_multiple_of(2);

        let mut dy = if odd_column {
            y * x_size - x_size * 0.5 + x_size / 4.0
        } else {
            y * x_size - x_size * 0.5
        };

        let left = x * x_size / 2.0 - x_size / 2.0;
        let right = 6.0 * x_size / 2.0 - x_size / 2.0;

        let mut place = |tx: f64, ty: f64| {
            svg.group(&styles)
                .transform(
                    &Transform::new()
                        .translate(tx, ty)
                        .rotate(45.0, x_size / 2.0, x_size / 2.0),
                )
                .rects(&x_shape, &unstyled)
                .end();
        };

        place(left, dy - y * x_size / 2.0);

        if cell.is_first_column() {
            place(right, dy - y * x_size / 2.0);
        }

        if cell.is_first_row() {
            dy = if odd_column {
                6.0 * x_size - x_size / 2.0 + x_size / 4.0
            } else {
                6.0 * x_size - x_size / 2.0
            };
            place(left, dy - 6.0 * x_size / 2.0);
        }

        if cell.row == 5 {
            place(left, dy - 11.0 * x_size / 2.0);
        }

        // Uses the bottom-row offset computed above
        if cell.is_origin() {
            place(right, dy - 6.0 * x_size / 2.0);
        }
    }
}
