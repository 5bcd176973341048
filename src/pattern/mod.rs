//! Pattern synthesis from fingerprints

/// Background color derivation
pub mod background;
/// Generator registry
pub mod generator;
/// Per-generator drawing routines
pub mod generators;
/// Caller-facing options
pub mod options;
/// Generated pattern and its encodings
pub mod output;
/// Generation pipeline
pub mod synthesizer;

pub use generator::Generator;
pub use options::GenerateOptions;
pub use output::GeneratedPattern;
pub use synthesizer::{generate, generate_now};
