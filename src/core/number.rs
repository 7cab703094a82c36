//! Conversions between entry strings and numbers.

/// Parse an entry string as a number.
///
/// Partial literals such as `"5."` or `".5"` parse normally. Anything that
/// is not a number, including the error marker, yields NaN.
pub fn parse_entry(entry: &str) -> f64 {
    entry.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Format a number for display.
///
/// Integral values have no fractional part, negative zero shows as `0`,
/// and non-finite values use `NaN`, `Infinity` and `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
