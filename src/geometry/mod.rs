//! Geometry helpers shared by the pattern generators

/// Value mapping helpers for sizes, fills and opacities
pub mod mapping;
/// Composite mosaic tile drawing
pub mod mosaic;
/// Shape vertex builders
pub mod shapes;

pub use mapping::{fill_color, fill_opacity, remap};
pub use shapes::Points;
