//! Numeric-input acceptance rules for the entry forms. Input that fails
//! here never reaches the statistics engine, which assumes its numbers
//! are valid or absent.

/// Replace the first comma with a period, so locales that type `12,5`
/// parse the same as `12.5`.
pub fn normalize_numeric_input(text: &str) -> String {
    text.replacen(',', ".", 1)
}

/// Parse user input into a number, accepting either decimal separator.
/// Returns `None` for anything that is not a plain finite number.
pub fn parse_numeric_input(text: &str) -> Option<f64> {
    normalize_numeric_input(text.trim())
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Whether `value` is an acceptable numeric input of at least `min`.
pub fn validate_numeric_input(value: &str, min: f64) -> bool {
    parse_numeric_input(value).is_some_and(|v| v >= min)
}
