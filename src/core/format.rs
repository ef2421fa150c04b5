//! Display formatting for accumulator values.

/// Values at or beyond this magnitude switch to scientific notation.
const SCIENTIFIC_ABOVE: f64 = 1e16;
/// Non-zero values below this magnitude switch to scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;

/// Render a value for the display.
///
/// Integral values keep a trailing `.0`, everything else uses the shortest
/// digits that parse back to the same value. Very large and very small
/// magnitudes use a signed, two-digit exponent.
///
/// ```rust
/// use calcmind::core::format_value;
///
/// assert_eq!(format_value(10.0), "10.0");
/// assert_eq!(format_value(0.1), "0.1");
/// assert_eq!(format_value(1e16), "1e+16");
/// assert_eq!(format_value(0.00001), "1e-05");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(SCIENTIFIC_BELOW..SCIENTIFIC_ABOVE).contains(&magnitude) {
        return scientific(value);
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

fn scientific(value: f64) -> String {
    let text = format!("{value:e}");
    let (mantissa, exp) = match text.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (text.as_str(), 0),
    };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.abs())
}
