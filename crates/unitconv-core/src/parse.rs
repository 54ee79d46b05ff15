//! Numeric input parsing.

use crate::error::ConversionError;
use crate::result::ConversionResult;

/// Grouping separator stripped before parsing (`1,234.5` → `1234.5`).
const GROUPING_SEPARATOR: char = ',';

/// Parse raw form text into a finite number.
///
/// Surrounding whitespace is ignored and commas are treated as grouping
/// separators. Blank input is [`ConversionError::EmptyInput`]; anything that
/// is not a finite decimal (letters, several decimal points, `inf`, `NaN`,
/// out-of-range exponents) is [`ConversionError::InvalidNumber`].
pub fn parse_value(raw: &str) -> ConversionResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let digits: String = trimmed
        .chars()
        .filter(|c| *c != GROUPING_SEPARATOR)
        .collect();

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConversionError::InvalidNumber),
    }
}
