//! Input/output layer: configuration, errors, logging and the command line

/// Command-line interface and batch processing
pub mod cli;
/// Pattern constants and output settings
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Tracing subscriber setup for the binary
pub mod logging;
/// Progress display for batch runs
pub mod progress;
