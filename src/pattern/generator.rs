//! Registry of the sixteen pattern generators

use crate::io::error::{PatternError, invalid_generator};
use std::fmt;
use std::str::FromStr;

/// A named tiling algorithm
///
/// The registry order is stable: it is the order the fingerprint indexes
/// into when no generator is requested, and the order shown to users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Generator {
    /// Octagons on a square grid (registered as `octogons`)
    Octagons,
    /// Overlapping filled circles
    OverlappingCircles,
    /// Interlocking plus signs
    PlusSigns,
    /// Plus signs rotated by 45 degrees
    Xes,
    /// Stacked sine wave strokes
    SineWaves,
    /// Offset hexagon columns
    Hexagons,
    /// Overlapping stroked rings
    OverlappingRings,
    /// Horizontal and vertical stripe bands
    Plaid,
    /// Alternating up and down triangles
    Triangles,
    /// Plain square grid
    Squares,
    /// Rings with a disc in the middle
    ConcentricCircles,
    /// Offset diamond rows
    Diamonds,
    /// 3.4.6.4 semi-regular tessellation
    Tessellation,
    /// Square outlines with a smaller square inside
    NestedSquares,
    /// Alternating inner and outer triangle mosaics
    MosaicSquares,
    /// Chevron rows
    Chevrons,
}

impl Generator {
    /// Every generator in registry order
    pub const ALL: [Self; 16] = [
        Self::Octagons,
        Self::OverlappingCircles,
        Self::PlusSigns,
        Self::Xes,
        Self::SineWaves,
        Self::Hexagons,
        Self::OverlappingRings,
        Self::Plaid,
        Self::Triangles,
        Self::Squares,
        Self::ConcentricCircles,
        Self::Diamonds,
        Self::Tessellation,
        Self::NestedSquares,
        Self::MosaicSquares,
        Self::Chevrons,
    ];

    /// Registered name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Octagons => "octogons",
            Self::OverlappingCircles => "overlappingCircles",
            Self::PlusSigns => "plusSigns",
            Self::Xes => "xes",
            Self::SineWaves => "sineWaves",
            Self::Hexagons => "hexagons",
            Self::OverlappingRings => "overlappingRings",
            Self::Plaid => "plaid",
            Self::Triangles => "triangles",
            Self::Squares => "squares",
            Self::ConcentricCircles => "concentricCircles",
            Self::Diamonds => "diamonds",
            Self::Tessellation => "tessellation",
            Self::NestedSquares => "nestedSquares",
            Self::MosaicSquares => "mosaicSquares",
            Self::Chevrons => "chevrons",
        }
    }

    /// Generator at a registry position, wrapping past the end
    pub fn from_index(index: usize) -> Self {
        Self::ALL
            .get(index % Self::ALL.len())
            .copied()
            .unwrap_or(Self::Octagons)
    }

    /// Registered names in registry order
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|generator| generator.as_str())
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Generator {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|generator| generator.as_str() == s)
            .copied()
            .ok_or_else(|| invalid_generator(&s))
    }
}

impl From<Generator> for String {
    fn from(generator: Generator) -> Self {
        generator.as_str().to_owned()
    }
}
