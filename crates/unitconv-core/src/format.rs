//! Result rounding and display formatting.

/// Digits shown after the decimal point.
pub const DISPLAY_PRECISION: usize = 6;

/// Round `value` to [`DISPLAY_PRECISION`] decimal places.
///
/// Rounds through the decimal rendering so the stored value is exactly what
/// [`format_result`] will print.
pub fn round_result(value: f64) -> f64 {
    format_result(value).parse().unwrap_or(value)
}

/// Render `value` with exactly [`DISPLAY_PRECISION`] fractional digits,
/// trailing zeros included.
pub fn format_result(value: f64) -> String {
    format!("{value:.prec$}", prec = DISPLAY_PRECISION)
}
