//! 3.4.6.4 semi-regular tessellation
//!
//! One tile holds twenty shaded pieces: squares at the corners, the edges and
//! the center, triangles around the hexagon gaps, and tilted squares between
//! them. Pieces that straddle the tile edge are drawn on both sides.

use crate::digest::Fingerprint;
use crate::document::{Attributes, Svg, Transform};
use crate::geometry::remap;
use crate::geometry::shapes::{Points, build_rotated_triangle_shape};
use crate::pattern::generators::{nibble_value, outlined_style};

const PIECES: usize = 20;

/// Measurements shared by every piece of the tile
#[derive(Clone, Copy, Debug)]
struct Tile {
    side: f64,
    hex_height: f64,
    hex_width: f64,
    triangle_height: f64,
    width: f64,
    height: f64,
}

impl Tile {
    // Operation order is part of the output contract
    #[allow(clippy::suboptimal_flops)]
    fn new(side: f64) -> Self {
        let hex_height = side * 3.0_f64.sqrt();
        let hex_width = side * 2.0;
        let triangle_height = side / 2.0 * 3.0_f64.sqrt();
        Self {
            side,
            hex_height,
            hex_width,
            triangle_height,
            width: side * 3.0 + triangle_height * 2.0,
            height: (hex_height * 2.0) + (side * 2.0),
        }
    }
}

/// Draw the tessellation tile
pub fn tessellation(fingerprint: &Fingerprint, svg: &mut Svg) {
    let side = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 5.0, 40.0);
    let tile = Tile::new(side);
    let triangle = build_rotated_triangle_shape(side, tile.triangle_height);

    svg.set_width(tile.width);
    svg.set_height(tile.height);

    for index in 0..PIECES {
        let styles = outlined_style(fingerprint.nibble(index));
        draw_piece(svg, index, &tile, &triangle, &styles);
    }
}

// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
fn draw_piece(svg: &mut Svg, index: usize, tile: &Tile, triangle: &Points, styles: &Attributes) {
    let Tile {
        side,
        hex_height,
        hex_width,
        triangle_height,
        width,
        height,
    } = *tile;
    let half = side / 2.0;

    match index {
        // Corners
        0 => {
            svg.rect(-half, -half, side, side, styles)
                .rect(width - half, -half, side, side, styles)
                .rect(-half, height - half, side, side, styles)
                .rect(width - half, height - half, side, side, styles);
        }
        // Center top square
        1 => {
            svg.rect(hex_width / 2.0 + triangle_height, hex_height / 2.0, side, side, styles);
        }
        // Side squares
        2 => {
            svg.rect(-half, height / 2.0 - half, side, side, styles)
                .rect(width - half, height / 2.0 - half, side, side, styles);
        }
        // Center bottom square
        3 => {
            svg.rect(
                hex_width / 2.0 + triangle_height,
                hex_height * 1.5 + side,
                side,
                side,
                styles,
            );
        }
        // Left top and bottom triangles
        4 => {
            svg.polyline(triangle, styles).transform(
                &Transform::new()
                    .translate(half, -half)
                    .rotate(0.0, half, triangle_height / 2.0),
            );
            svg.polyline(triangle, styles).transform(
                &Transform::new()
                    .translate(half, height - -half)
                    .rotate(0.0, half, triangle_height / 2.0)
                    .scale(1.0, -1.0),
            );
        }
        // Right top and bottom triangles
        5 => {
            svg.polyline(triangle, styles).transform(
                &Transform::new()
                    .translate(width - half, -half)
                    .rotate(0.0, half, triangle_height / 2.0)
                    .scale(-1.0, 1.0),
            );
            svg.polyline(triangle, styles).transform(
                &Transform::new()
                    .translate(width - half, height + half)
                    .rotate(0.0, half, triangle_height / 2.0)
                    .scale(-1.0, -1.0),
            );
        }
        // Center top right triangle
        6 => {
            svg.polyline(triangle, styles)
                .transform(&Transform::new().translate(width / 2.0 + half, hex_height / 2.0));
        }
        // Center top left triangle
        7 => {
            svg.polyline(triangle, styles).transform(
                &Transform::new()
                    .translate(width - width / 2.0 - half, hex_height / 2.0)
                    .scale(-1.0, 1.0),
            );
        }
        // Center bottom right triangle
        8 => {
            svg.polyline(triangle, styles).transform(
                &Transform::new()
                    .translate(width / 2.0 + half, height - hex_height / 2.0)
                    .scale(1.0, -1.0),
            );
        }
        // Center bottom left triangle
        9 => {
            svg.polyline(triangle, styles).transform(
                &Transform::new()
                    .translate(width - width / 2.0 - half, height - hex_height / 2.0)
                    .scale(-1.0, -1.0),
            );
        }
        // Left middle triangle
        10 => {
            svg.polyline(triangle, styles)
                .transform(&Transform::new().translate(half, height / 2.0 - half));
        }
        // Right middle triangle
        11 => {
            svg.polyline(triangle, styles).transform(
                &Transform::new()
                    .translate(width - half, height / 2.0 - half)
                    .scale(-1.0, 1.0),
            );
        }
        // Left top square
        12 => {
            svg.rect(0.0, 0.0, side, side, styles).transform(
                &Transform::new()
                    .translate(half, half)
                    .rotate(-30.0, 0.0, 0.0),
            );
        }
        // Right top square
        13 => {
            svg.rect(0.0, 0.0, side, side, styles).transform(
                &Transform::new()
                    .scale(-1.0, 1.0)
                    .translate(-width + half, half)
                    .rotate(-30.0, 0.0, 0.0),
            );
        }
        // Left center top square
        14 => {
            svg.rect(0.0, 0.0, side, side, styles).transform(
                &Transform::new()
                    .translate(half, height / 2.0 - half - side)
                    .rotate(30.0, 0.0, side),
            );
        }
        // Right center top square
        15 => {
            svg.rect(0.0, 0.0, side, side, styles).transform(
                &Transform::new()
                    .scale(-1.0, 1.0)
                    .translate(-width + half, height / 2.0 - half - side)
                    .rotate(30.0, 0.0, side),
            );
        }
        // Left center bottom square
        16 => {
            svg.rect(0.0, 0.0, side, side, styles).transform(
                &Transform::new()
                    .scale(1.0, -1.0)
                    .translate(half, -height + height / 2.0 - half - side)
                    .rotate(30.0, 0.0, side),
            );
        }
        // Right center bottom square
        17 => {
            svg.rect(0.0, 0.0, side, side, styles).transform(
                &Transform::new()
                    .scale(-1.0, -1.0)
                    .translate(-width + half, -height + height / 2.0 - half - side)
                    .rotate(30.0, 0.0, side),
            );
        }
        // Left bottom square
        18 => {
            svg.rect(0.0, 0.0, side, side, styles).transform(
                &Transform::new()
                    .scale(1.0, -1.0)
                    .translate(half, -height + half)
                    .rotate(-30.0, 0.0, 0.0),
            );
        }
        // Right bottom square
        19 => {
            svg.rect(0.0, 0.0, side, side, styles).transform(
                &Transform::new()
                    .scale(-1.0, -1.0)
                    .translate(-width + half, -height + half)
                    .rotate(-30.0, 0.0, 0.0),
            );
        }
        _ => {}
    }
}
