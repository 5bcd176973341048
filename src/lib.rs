//! Deterministic, tileable SVG background patterns derived from strings
//!
//! An input string is digested into a forty digit fingerprint. The
//! fingerprint picks one of sixteen generators, rotates a base color into the
//! background, and sizes and shades every shape the generator draws. The same
//! input always yields byte-identical markup.

#![forbid(unsafe_code)]

/// RGB and HSL color conversions
pub mod color;
/// SHA-1 digest engine and fingerprints
pub mod digest;
/// SVG document model and serialization
pub mod document;
/// Value mapping, shape vertices and composite tiles
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;
/// Generator registry and the generation pipeline
pub mod pattern;

pub use digest::Fingerprint;
pub use io::error::{PatternError, Result};
pub use pattern::{GenerateOptions, GeneratedPattern, Generator, generate, generate_now};
