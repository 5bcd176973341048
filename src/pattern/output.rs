//! The finished pattern and its encodings

use crate::digest::Fingerprint;
use crate::io::configuration::DATA_URI_PREFIX;
use crate::pattern::generator::Generator;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;

/// Result of one generation: markup plus the values it was derived from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedPattern {
    color: String,
    generator: Generator,
    fingerprint: Fingerprint,
    markup: String,
}

impl GeneratedPattern {
    pub(crate) const fn new(
        color: String,
        generator: Generator,
        fingerprint: Fingerprint,
        markup: String,
    ) -> Self {
        Self {
            color,
            generator,
            fingerprint,
            markup,
        }
    }

    /// Background color as `#rrggbb`
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Generator that drew the pattern
    pub const fn generator(&self) -> Generator {
        self.generator
    }

    /// Fingerprint the pattern was derived from
    pub const fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// SVG markup
    pub fn to_svg(&self) -> &str {
        &self.markup
    }

    /// Standard, padded base64 of the markup
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.markup.as_bytes())
    }

    /// `data:` URI embedding the base64 markup
    pub fn to_data_uri(&self) -> String {
        format!("{DATA_URI_PREFIX}{}", self.to_base64())
    }

    /// CSS `url("...")` value wrapping the data URI
    pub fn to_data_url(&self) -> String {
        format!("url(\"{}\")", self.to_data_uri())
    }
}

impl fmt::Display for GeneratedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}
