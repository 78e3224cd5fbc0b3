//! Numeric detection and formatting.

/// Parses a trimmed string as a finite floating-point number.
///
/// Returns `None` for empty strings, non-numeric text, and non-finite
/// spellings such as `inf` or `NaN`.
pub fn parse_finite(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Formats a floating-point number for display. `Display` for `f64` already
/// omits trailing zeros (`2.0` renders as `2`).
pub fn format_numeric(value: f64) -> String {
    format!("{value}")
}
