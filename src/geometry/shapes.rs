//! Vertex lists for the shapes the generators tile
//!
//! Every builder returns flat `x,y` coordinate pairs. The formulas (including
//! the 0.33 and 0.66 proportions) are fixed: changing any of them changes the
//! emitted markup of every pattern that uses the shape.

use crate::document::number::join_numbers;
use std::fmt;

/// Flat list of `x, y` coordinate pairs, rendered as a `points` attribute
#[derive(Clone, Debug, PartialEq)]
pub struct Points(Vec<f64>);

impl Points {
    /// Wrap a flat coordinate list
    pub const fn new(coordinates: Vec<f64>) -> Self {
        Self(coordinates)
    }

    /// Coordinates in order
    pub fn coordinates(&self) -> &[f64] {
        &self.0
    }

    /// Coordinates grouped into `(x, y)` vertices
    pub fn vertices(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0
            .chunks_exact(2)
            .filter_map(|pair| Some((*pair.first()?, *pair.get(1)?)))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_numbers(&self.0))
    }
}

/// Regular hexagon with flat top and bottom edges
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn build_hexagon_shape(side_length: f64) -> Points {
    let c = side_length;
    let a = c / 2.0;
    let b = (60.0 * std::f64::consts::PI / 180.0).sin() * c;

    Points::new(vec![
        0.0,
        b,
        a,
        0.0,
        a + c,
        0.0,
        2.0 * c,
        b,
        a + c,
        2.0 * b,
        a,
        2.0 * b,
        0.0,
        b,
    ])
}

/// Chevron as two mirrored halves
pub fn build_chevron_shape(width: f64, height: f64) -> [Points; 2] {
    let e = height * 0.66;
    let x = width / 2.0;
    let y = height - e;

    [
        Points::new(vec![0.0, 0.0, x, y, x, height, 0.0, e, 0.0, 0.0]),
        Points::new(vec![x, y, width, 0.0, width, e, x, height, x, y]),
    ]
}

/// Plus sign as a vertical and a horizontal `[x, y, width, height]` bar
pub fn build_plus_shape(square_size: f64) -> [[f64; 4]; 2] {
    [
        [square_size, 0.0, square_size, square_size * 3.0],
        [0.0, square_size, square_size * 3.0, square_size],
    ]
}

/// Octagon inscribed in a square
pub fn build_octagon_shape(square_size: f64) -> Points {
    let s = square_size;
    let c = s * 0.33;
    let t = s - c;

    Points::new(vec![
        c, 0.0, t, 0.0, s, c, s, t, t, s, c, s, 0.0, t, 0.0, c, c, 0.0,
    ])
}

/// Isosceles triangle with its apex at the top
pub fn build_triangle_shape(side_length: f64, height: f64) -> Points {
    let half_width = side_length / 2.0;
    Points::new(vec![
        half_width,
        0.0,
        side_length,
        height,
        0.0,
        height,
        half_width,
        0.0,
    ])
}

/// Diamond touching the midpoints of its bounding box
pub fn build_diamond_shape(width: f64, height: f64) -> Points {
    Points::new(vec![
        width / 2.0,
        0.0,
        width,
        height / 2.0,
        width / 2.0,
        height,
        0.0,
        height / 2.0,
    ])
}

/// Right triangle with the right angle at the bottom left
pub fn build_right_triangle_shape(side_length: f64) -> Points {
    Points::new(vec![
        0.0,
        0.0,
        side_length,
        side_length,
        0.0,
        side_length,
        0.0,
        0.0,
    ])
}

/// Triangle pointing right, as used by the 3.4.6.4 tessellation
pub fn build_rotated_triangle_shape(side_length: f64, triangle_width: f64) -> Points {
    let half_height = side_length / 2.0;
    Points::new(vec![
        0.0,
        0.0,
        triangle_width,
        half_height,
        0.0,
        side_length,
        0.0,
        0.0,
    ])
}
