//! Square based generators

use crate::digest::Fingerprint;
use crate::document::Svg;
use crate::geometry::mosaic::{draw_inner_mosaic_tile, draw_outer_mosaic_tile};
use crate::geometry::remap;
use crate::pattern::generators::{cells, nibble_value, shape_style, stroke_style};

/// Plain grid of shaded squares
pub fn squares(fingerprint: &Fingerprint, svg: &mut Svg) {
    let square_size = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 10.0, 60.0);

    svg.set_width(square_size * 6.0);
    svg.set_height(square_size * 6.0);

    for cell in cells(6, 6) {
        let styles = shape_style(fingerprint.nibble(cell.index));
        svg.rect(
            cell.x() * square_size,
            cell.y() * square_size,
            square_size,
            square_size,
            &styles,
        );
    }
}

/// Square outlines, each with a smaller outline centered inside
///
/// The outer square reads nibble `i` and the inner one nibble `39 - i`.
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn nested_squares(fingerprint: &Fingerprint, svg: &mut Svg) {
    let block_size = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 4.0, 12.0);
    let square_size = block_size * 7.0;

    svg.set_width((square_size + block_size) * 6.0 + block_size * 6.0);
    svg.set_height((square_size + block_size) * 6.0 + block_size * 6.0);

    for cell in cells(6, 6) {
        let (x, y) = (cell.x(), cell.y());
        let outer_x = x * square_size + x * block_size * 2.0 + block_size / 2.0;
        let outer_y = y * square_size + y * block_size * 2.0 + block_size / 2.0;

        let outer = stroke_style(fingerprint.nibble(cell.index), block_size);
        svg.rect(outer_x, outer_y, square_size, square_size, &outer);

        let inner = stroke_style(
            fingerprint.nibble(Fingerprint::LEN - 1 - cell.index),
            block_size,
        );
        svg.rect(
            outer_x + block_size * 2.0,
            outer_y + block_size * 2.0,
            block_size * 3.0,
            block_size * 3.0,
            &inner,
        );
    }
}

/// 4x4 checkerboard of outer and inner mosaic tiles
///
/// Cells on the main checkerboard color get an outer tile shaded by nibble
/// `i`, the others an inner tile shaded by nibbles `i` and `i + 1`.
pub fn mosaic_squares(fingerprint: &Fingerprint, svg: &mut Svg) {
    let triangle_size = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 15.0, 50.0);

    svg.set_width(triangle_size * 8.0);
    svg.set_height(triangle_size * 8.0);

    for cell in cells(4, 4) {
        let x = cell.x() * triangle_size * 2.0;
        let y = cell.y() * triangle_size * 2.0;
        let nibble = fingerprint.nibble(cell.index);

        if cell.column % 2 == cell.row % 2 {
            draw_outer_mosaic_tile(svg, x, y, triangle_size, nibble);
        } else {
            let next = fingerprint.nibble(cell.index + 1);
            draw_inner_mosaic_tile(svg, x, y, triangle_size, [nibble, next]);
        }
    }
}
