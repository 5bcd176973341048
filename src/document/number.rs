//! Number rendering for attribute values
//!
//! Emitted markup is compared byte for byte against established outputs, so
//! numbers use the shortest digits that round-trip, drop a trailing `.0`, and
//! switch to exponent notation (`1e-7`, `1e+21`) outside `[1e-6, 1e21)`.

/// Render a number the way attribute values expect it
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    // Also folds negative zero
    if value == 0.0 {
        return "0".to_owned();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }

    let formatted = format!("{value:e}");
    if let Some((mantissa, exponent)) = formatted.split_once('e')
        && !exponent.starts_with('-')
    {
        return format!("{mantissa}e+{exponent}");
    }
    formatted
}

/// Join numbers with commas, as used by `points` and transform arguments
pub fn join_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|&value| format_number(value))
        .collect::<Vec<_>>()
        .join(",")
}
