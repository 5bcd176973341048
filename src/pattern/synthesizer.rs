//! Generation pipeline: resolve fingerprint, generator and color, then draw
//!
//! Every option is resolved before any markup is produced, so a rejected
//! option never leaves a partial document behind.

use crate::digest::{Fingerprint, digest_text};
use crate::document::{Attributes, Svg};
use crate::io::configuration::GENERATOR_NIBBLE;
use crate::io::error::Result;
use crate::pattern::background::derive_background;
use crate::pattern::generator::Generator;
use crate::pattern::generators::draw;
use crate::pattern::options::GenerateOptions;
use crate::pattern::output::GeneratedPattern;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generate the pattern for `input`
///
/// # Errors
///
/// Returns `InvalidHash` for a malformed `hash` option, `InvalidGenerator`
/// for an unregistered generator name and `InvalidColor` for a malformed
/// `color` or `base_color`
pub fn generate(input: &str, options: &GenerateOptions) -> Result<GeneratedPattern> {
    let fingerprint = resolve_fingerprint(input, options)?;
    let generator = resolve_generator(&fingerprint, options)?;
    let background = derive_background(&fingerprint, options)?;

    let mut svg = Svg::new();
    svg.rect(
        0.0,
        0.0,
        "100%",
        "100%",
        &Attributes::new().with("fill", background.to_css()),
    );
    draw(generator, &fingerprint, &mut svg);

    tracing::debug!(
        %generator,
        %fingerprint,
        color = %background,
        elements = svg.element_count(),
        "generated pattern"
    );

    Ok(GeneratedPattern::new(
        background.to_hex(),
        generator,
        fingerprint,
        svg.to_markup(),
    ))
}

/// Generate a pattern using the current time in milliseconds as input
///
/// # Errors
///
/// Fails under the same conditions as [`generate`]
pub fn generate_now(options: &GenerateOptions) -> Result<GeneratedPattern> {
    generate(&current_millis().to_string(), options)
}

/// Milliseconds since the Unix epoch, or 0 for a clock set before it
pub fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}

/// Fingerprint from the `hash` option, or the digest of `input`
///
/// # Errors
///
/// Returns `InvalidHash` if the `hash` option is not 40 hexadecimal digits
pub fn resolve_fingerprint(input: &str, options: &GenerateOptions) -> Result<Fingerprint> {
    options
        .hash
        .as_deref()
        .map_or_else(|| Ok(digest_text(input)), Fingerprint::parse)
}

/// Generator from the `generator` option, or the one the fingerprint selects
///
/// # Errors
///
/// Returns `InvalidGenerator` if the requested name is not registered
pub fn resolve_generator(fingerprint: &Fingerprint, options: &GenerateOptions) -> Result<Generator> {
    options.generator.as_deref().map_or_else(
        || {
            Ok(Generator::from_index(usize::from(
                fingerprint.nibble(GENERATOR_NIBBLE),
            )))
        },
        str::parse,
    )
}
