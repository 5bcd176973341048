//! Caller-facing generation options

use crate::io::configuration::DEFAULT_BASE_COLOR;

/// Options accepted by [`crate::generate`]
///
/// Values are kept as given and validated when a pattern is generated, so a
/// bad value fails that call without producing any output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Exact background color; skips fingerprint-based derivation
    pub color: Option<String>,
    /// Color whose hue and saturation the fingerprint rotates
    pub base_color: String,
    /// Registered generator name; chosen from the fingerprint when absent
    pub generator: Option<String>,
    /// Pre-computed fingerprint used instead of digesting the input
    pub hash: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            color: None,
            base_color: DEFAULT_BASE_COLOR.to_owned(),
            generator: None,
            hash: None,
        }
    }
}

impl GenerateOptions {
    /// Options with every value at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an exact background color
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Rotate a different base color
    #[must_use]
    pub fn base_color(mut self, base_color: impl Into<String>) -> Self {
        self.base_color = base_color.into();
        self
    }

    /// Request a generator by name or by [`crate::Generator`] value
    #[must_use]
    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    /// Supply the fingerprint directly
    #[must_use]
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}
