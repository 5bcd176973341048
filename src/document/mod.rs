//! Vector document model accumulating primitives and transforms
//!
//! This module contains:
//! - Number and attribute value rendering
//! - Ordered attribute maps
//! - Transform composition
//! - The SVG builder with its group context stack

/// Ordered attribute maps and attribute values
pub mod attributes;
/// Shortest round-trip number rendering
pub mod number;
/// SVG builder and serializer
pub mod svg;
/// Composed transform attribute values
pub mod transform;

pub use attributes::{Attributes, Value};
pub use svg::{Element, Svg};
pub use transform::Transform;
