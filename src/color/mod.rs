//! Color parsing and color-space conversion

/// Hex, RGB and HSL conversions
pub mod conversion;

pub use conversion::{Hsl, Rgb};
