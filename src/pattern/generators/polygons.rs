//! Polygon grid generators

use crate::digest::Fingerprint;
use crate::document::{Attributes, Svg, Transform};
use crate::geometry::remap;
use crate::geometry::shapes::{
    build_chevron_shape, build_diamond_shape, build_hexagon_shape, build_octagon_shape,
    build_triangle_shape,
};
use crate::pattern::generators::{cells, nibble_value, outlined_style, shape_style};

/// Octagons on a plain square grid
pub fn octagons(fingerprint: &Fingerprint, svg: &mut Svg) {
    let square_size = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 10.0, 60.0);
    let tile = build_octagon_shape(square_size);

    svg.set_width(square_size * 6.0);
    svg.set_height(square_size * 6.0);

    for cell in cells(6, 6) {
        let styles = shape_style(fingerprint.nibble(cell.index));
        svg.polyline(&tile, &styles).transform(
            &Transform::new().translate(cell.x() * square_size, cell.y() * square_size),
        );
    }
}

/// Hexagon columns, every odd column shifted down by half a hexagon
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn hexagons(fingerprint: &Fingerprint, svg: &mut Svg) {
    let side_length = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 8.0, 60.0);
    let hex_height = side_length * 3.0_f64.sqrt();
    let hex_width = side_length * 2.0;
    let hex = build_hexagon_shape(side_length);

    svg.set_width(hex_width * 3.0 + side_length * 3.0);
    svg.set_height(hex_height * 6.0);

    for cell in cells(6, 6) {
        let styles = shape_style(fingerprint.nibble(cell.index));
        let (x, y) = (cell.x(), cell.y());
        let odd_column = !cell.column.is_multiple_of(2);

        let dy = if odd_column {
            y * hex_height + hex_height / 2.0
        } else {
            y * hex_height
        };

        svg.polyline(&hex, &styles).transform(
            &Transform::new().translate(x * side_length * 1.5 - hex_width / 2.0, dy - hex_height / 2.0),
        );

        if cell.is_first_column() {
            svg.polyline(&hex, &styles).transform(
                &Transform::new()
                    .translate(6.0 * side_length * 1.5 - hex_width / 2.0, dy - hex_height / 2.0),
            );
        }

        if cell.is_first_row() {
            let bottom_dy = if odd_column {
                6.0 * hex_height + hex_height / 2.0
            } else {
                6.0 * hex_height
            };
            svg.polyline(&hex, &styles).transform(
                &Transform::new().translate(
                    x * side_length * 1.5 - hex_width / 2.0,
                    bottom_dy - hex_height / 2.0,
                ),
            );
        }

        if cell.is_origin() {
            svg.polyline(&hex, &styles).transform(&Transform::new().translate(
                6.0 * side_length * 1.5 - hex_width / 2.0,
                5.0 * hex_height + hex_height / 2.0,
            ));
        }
    }
}

/// Alternating up and down triangles
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn triangles(fingerprint: &Fingerprint, svg: &mut Svg) {
    let side_length = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 15.0, 80.0);
    let triangle_height = side_length / 2.0 * 3.0_f64.sqrt();
    let triangle = build_triangle_shape(side_length, triangle_height);

    svg.set_width(side_length * 3.0);
    svg.set_height(triangle_height * 6.0);

    for cell in cells(6, 6) {
        let styles = shape_style(fingerprint.nibble(cell.index));
        let (x, y) = (cell.x(), cell.y());

        // Even rows flip even columns, odd rows flip odd columns
        let flipped = cell.row.is_multiple_of(2) == cell.column.is_multiple_of(2);
        let rotation = if flipped { 180.0 } else { 0.0 };

        svg.polyline(&triangle, &styles).transform(
            &Transform::new()
                .translate(x * side_length * 0.5 - side_length / 2.0, triangle_height * y)
                .rotate(rotation, side_length / 2.0, triangle_height / 2.0),
        );

        if cell.is_first_column() {
            svg.polyline(&triangle, &styles).transform(
                &Transform::new()
                    .translate(6.0 * side_length * 0.5 - side_length / 2.0, triangle_height * y)
                    .rotate(rotation, side_length / 2.0, triangle_height / 2.0),
            );
        }
    }
}

/// Diamond rows, every odd row shifted right by half a diamond
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn diamonds(fingerprint: &Fingerprint, svg: &mut Svg) {
    let diamond_width = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 10.0, 50.0);
    let diamond_height = remap(nibble_value(fingerprint, 1), 0.0, 15.0, 10.0, 50.0);
    let diamond = build_diamond_shape(diamond_width, diamond_height);

    svg.set_width(diamond_width * 6.0);
    svg.set_height(diamond_height * 3.0);

    for cell in cells(6, 6) {
        let styles = shape_style(fingerprint.nibble(cell.index));
        let (x, y) = (cell.x(), cell.y());
        let dx = if cell.row.is_multiple_of(2) {
            0.0
        } else {
            diamond_width / 2.0
        };

        let left = x * diamond_width - diamond_width / 2.0 + dx;
        let right = 6.0 * diamond_width - diamond_width / 2.0 + dx;
        let top = diamond_height / 2.0 * y - diamond_height / 2.0;
        let bottom = diamond_height / 2.0 * 6.0 - diamond_height / 2.0;

        svg.polyline(&diamond, &styles)
            .transform(&Transform::new().translate(left, top));

        if cell.is_first_column() {
            svg.polyline(&diamond, &styles)
                .transform(&Transform::new().translate(right, top));
        }

        if cell.is_first_row() {
            svg.polyline(&diamond, &styles)
                .transform(&Transform::new().translate(left, bottom));
        }

        if cell.is_origin() {
            svg.polyline(&diamond, &styles)
                .transform(&Transform::new().translate(right, bottom));
        }
    }
}

/// Rows of chevrons, each drawn as a group of two halves
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn chevrons(fingerprint: &Fingerprint, svg: &mut Svg) {
    let chevron_width = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 30.0, 80.0);
    let chevron_height = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 30.0, 80.0);
    let chevron = build_chevron_shape(chevron_width, chevron_height);
    let unstyled = Attributes::new();

    svg.set_width(chevron_width * 6.0);
    svg.set_height(chevron_height * 6.0 * 0.66);

    for cell in cells(6, 6) {
        let styles = outlined_style(fingerprint.nibble(cell.index));
        let x = cell.x() * chevron_width;

        svg.group(&styles)
            .transform(
                &Transform::new()
                    .translate(x, cell.y() * chevron_height * 0.66 - chevron_height / 2.0),
            )
            .polylines(&chevron, &unstyled)
            .end();

        if cell.is_first_row() {
            svg.group(&styles)
                .transform(
                    &Transform::new().translate(x, 6.0 * chevron_height * 0.66 - chevron_height / 2.0),
                )
                .polylines(&chevron, &unstyled)
                .end();
        }
    }
}
