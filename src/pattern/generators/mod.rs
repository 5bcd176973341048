//! Drawing routines for each generator and the dispatch between them
//!
//! Generators read their sizes and per-cell shading from fingerprint nibbles,
//! size the document, and add duplicates of edge cells on the opposite edge
//! so that the tile repeats without a visible seam.

/// Circle and ring based patterns
pub mod circles;
/// Plus and cross patterns
pub mod crosses;
/// Polygon grids
pub mod polygons;
/// Square based patterns
pub mod squares;
/// The 3.4.6.4 semi-regular tessellation
pub mod tessellation;
/// Stripe and wave patterns
pub mod waves;

use crate::digest::Fingerprint;
use crate::document::{Attributes, Svg, Value};
use crate::geometry::{fill_color, fill_opacity};
use crate::io::configuration::{STROKE_COLOR, STROKE_OPACITY};
use crate::pattern::generator::Generator;

/// Run the drawing routine of `generator`
pub fn draw(generator: Generator, fingerprint: &Fingerprint, svg: &mut Svg) {
    match generator {
        Generator::Octagons => polygons::octagons(fingerprint, svg),
        Generator::OverlappingCircles => circles::overlapping_circles(fingerprint, svg),
        Generator::PlusSigns => crosses::plus_signs(fingerprint, svg),
        Generator::Xes => crosses::xes(fingerprint, svg),
        Generator::SineWaves => waves::sine_waves(fingerprint, svg),
        Generator::Hexagons => polygons::hexagons(fingerprint, svg),
        Generator::OverlappingRings => circles::overlapping_rings(fingerprint, svg),
        Generator::Plaid => waves::plaid(fingerprint, svg),
        Generator::Triangles => polygons::triangles(fingerprint, svg),
        Generator::Squares => squares::squares(fingerprint, svg),
        Generator::ConcentricCircles => circles::concentric_circles(fingerprint, svg),
        Generator::Diamonds => polygons::diamonds(fingerprint, svg),
        Generator::Tessellation => tessellation::tessellation(fingerprint, svg),
        Generator::NestedSquares => squares::nested_squares(fingerprint, svg),
        Generator::MosaicSquares => squares::mosaic_squares(fingerprint, svg),
        Generator::Chevrons => polygons::chevrons(fingerprint, svg),
    }
}

/// Position of one cell in a generator's grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Row-major position, also the nibble the cell is shaded by
    pub index: usize,
    /// Column, starting at 0
    pub column: u32,
    /// Row, starting at 0
    pub row: u32,
}

impl Cell {
    /// Column as a coordinate multiplier
    pub fn x(self) -> f64 {
        f64::from(self.column)
    }

    /// Row as a coordinate multiplier
    pub fn y(self) -> f64 {
        f64::from(self.row)
    }

    /// True for the first column
    pub const fn is_first_column(self) -> bool {
        self.column == 0
    }

    /// True for the first row
    pub const fn is_first_row(self) -> bool {
        self.row == 0
    }

    /// True for the top-left cell
    pub const fn is_origin(self) -> bool {
        self.column == 0 && self.row == 0
    }
}

/// Cells of a `columns` by `rows` grid in row-major order
pub fn cells(columns: u32, rows: u32) -> impl Iterator<Item = Cell> {
    (0..rows)
        .flat_map(move |row| (0..columns).map(move |column| (column, row)))
        .enumerate()
        .map(|(index, (column, row))| Cell { index, column, row })
}

/// A nibble as a float, for feeding into `remap`
pub fn nibble_value(fingerprint: &Fingerprint, index: usize) -> f64 {
    f64::from(fingerprint.nibble(index))
}

/// Filled, faintly outlined shape: fill, fill-opacity, stroke, stroke-opacity
pub fn shape_style(nibble: u8) -> Attributes {
    Attributes::new()
        .with("fill", fill_color(nibble))
        .with("fill-opacity", fill_opacity(nibble))
        .with("stroke", STROKE_COLOR)
        .with("stroke-opacity", STROKE_OPACITY)
}

/// Outline-first shape with a one pixel stroke, used by grouped shapes
pub fn outlined_style(nibble: u8) -> Attributes {
    Attributes::new()
        .with("stroke", STROKE_COLOR)
        .with("stroke-opacity", STROKE_OPACITY)
        .with("fill", fill_color(nibble))
        .with("fill-opacity", fill_opacity(nibble))
        .with("stroke-width", 1.0)
}

/// Unfilled stroke of the given width, shaded by the nibble
pub fn stroke_style(nibble: u8, stroke_width: f64) -> Attributes {
    Attributes::new()
        .with("fill", "none")
        .with("stroke", fill_color(nibble))
        .with("opacity", fill_opacity(nibble))
        .with("stroke-width", Value::pixels(stroke_width))
}

/// Solid fill with whole-element opacity
pub fn solid_style(nibble: u8) -> Attributes {
    Attributes::new()
        .with("fill", fill_color(nibble))
        .with("opacity", fill_opacity(nibble))
}
