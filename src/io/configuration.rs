//! Pattern constants and runtime configuration defaults

// Fill palette, chosen per cell by nibble parity
/// Fill color used for odd nibbles
pub const FILL_COLOR_DARK: &str = "#222";
/// Fill color used for even nibbles
pub const FILL_COLOR_LIGHT: &str = "#ddd";

/// Outline color shared by stroked shapes
pub const STROKE_COLOR: &str = "#000";
/// Outline opacity shared by stroked shapes
pub const STROKE_OPACITY: f64 = 0.02;

// Opacity band that nibbles 0..=15 are mapped into
/// Opacity for nibble 0
pub const OPACITY_MIN: f64 = 0.02;
/// Opacity for nibble 15
pub const OPACITY_MAX: f64 = 0.15;

/// Base color rotated by the fingerprint when no explicit color is given
pub const DEFAULT_BASE_COLOR: &str = "#933c3c";

/// Namespace attribute of the root element
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// Width and height of a document before a generator sizes it
pub const DEFAULT_DOCUMENT_SIZE: f64 = 100.0;

/// Nibble that picks the generator when none is requested
pub const GENERATOR_NIBBLE: usize = 20;
/// Start of the three nibbles that rotate the base hue
pub const HUE_OFFSET_NIBBLE: usize = 14;
/// Nibble that shifts the base saturation
pub const SATURATION_OFFSET_NIBBLE: usize = 17;

/// Prefix of a base64 SVG data URI
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

// Output settings
/// Extension for files holding raw markup
pub const SVG_EXTENSION: &str = "svg";
/// Extension for files holding encoded text
pub const TEXT_EXTENSION: &str = "txt";
/// File stem used when an input has no usable characters
pub const FALLBACK_STEM: &str = "pattern";

// Progress bar display settings
/// Batches at or below this size do not get a progress bar
pub const MIN_PROGRESS_BATCH: usize = 1;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
