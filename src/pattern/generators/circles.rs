//! Circle and ring based generators

use crate::digest::Fingerprint;
use crate::document::{Attributes, Svg};
use crate::geometry::{fill_color, fill_opacity, remap};
use crate::pattern::generators::{cells, nibble_value, solid_style, stroke_style};

/// Filled circles whose radius is the grid spacing
pub fn overlapping_circles(fingerprint: &Fingerprint, svg: &mut Svg) {
    let diameter = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 25.0, 200.0);
    let radius = diameter / 2.0;

    svg.set_width(radius * 6.0);
    svg.set_height(radius * 6.0);

    for cell in cells(6, 6) {
        let styles = solid_style(fingerprint.nibble(cell.index));
        let (x, y) = (cell.x(), cell.y());

        svg.circle(x * radius, y * radius, radius, &styles);

        // Right column
        if cell.is_first_column() {
            svg.circle(6.0 * radius, y * radius, radius, &styles);
        }

        // Bottom row
        if cell.is_first_row() {
            svg.circle(x * radius, 6.0 * radius, radius, &styles);
        }

        // Bottom-right corner
        if cell.is_origin() {
            svg.circle(6.0 * radius, 6.0 * radius, radius, &styles);
        }
    }
}

/// Stroked rings spaced one ring size apart
pub fn overlapping_rings(fingerprint: &Fingerprint, svg: &mut Svg) {
    let ring_size = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 10.0, 60.0);
    let stroke_width = ring_size / 4.0;
    let radius = ring_size - stroke_width / 2.0;

    svg.set_width(ring_size * 6.0);
    svg.set_height(ring_size * 6.0);

    for cell in cells(6, 6) {
        let styles = stroke_style(fingerprint.nibble(cell.index), stroke_width);
        let (x, y) = (cell.x(), cell.y());

        svg.circle(x * ring_size, y * ring_size, radius, &styles);

        if cell.is_first_column() {
            svg.circle(6.0 * ring_size, y * ring_size, radius, &styles);
        }

        if cell.is_first_row() {
            svg.circle(x * ring_size, 6.0 * ring_size, radius, &styles);
        }

        if cell.is_origin() {
            svg.circle(6.0 * ring_size, 6.0 * ring_size, radius, &styles);
        }
    }
}

/// A ring and a centered disc per cell
///
/// The ring reads nibble `i`, the disc reads nibble `39 - i`, so the two
/// layers are shaded from opposite ends of the fingerprint. Cells never
/// cross the tile edge, so no duplicates are needed.
// Operation order is part of the output contract
#[allow(clippy::suboptimal_flops)]
pub fn concentric_circles(fingerprint: &Fingerprint, svg: &mut Svg) {
    let ring_size = remap(nibble_value(fingerprint, 0), 0.0, 15.0, 10.0, 60.0);
    let stroke_width = ring_size / 5.0;

    svg.set_width((ring_size + stroke_width) * 6.0);
    svg.set_height((ring_size + stroke_width) * 6.0);

    for cell in cells(6, 6) {
        let (x, y) = (cell.x(), cell.y());
        let cx = x * ring_size + x * stroke_width + ring_size.midpoint(stroke_width);
        let cy = y * ring_size + y * stroke_width + ring_size.midpoint(stroke_width);

        let ring = stroke_style(fingerprint.nibble(cell.index), stroke_width);
        svg.circle(cx, cy, ring_size / 2.0, &ring);

        let inner = fingerprint.nibble(Fingerprint::LEN - 1 - cell.index);
        let disc = Attributes::new()
            .with("fill", fill_color(inner))
            .with("fill-opacity", fill_opacity(inner));
        svg.circle(cx, cy, ring_size / 4.0, &disc);
    }
}
