//! Per-category converters.
//!
//! Every converter has the same shape, `(value, from, to) -> result`, so a
//! [`CategoryDescriptor`](crate::types::category::CategoryDescriptor) can hold
//! any of them as a plain function pointer.

pub mod length;
pub mod temperature;
pub mod weight;

pub use length::convert_length;
pub use temperature::convert_temperature;
pub use weight::convert_weight;

use crate::error::ConversionError;
use crate::result::ConversionResult;
use crate::types::category::Category;
use crate::units::UnitTable;

/// Signature shared by all converters.
pub type ConvertFn = fn(f64, &str, &str) -> ConversionResult<f64>;

/// Scale `value` from `from` to `to` through the table's base unit.
///
/// Both unit names are validated before any arithmetic. A unit converted to
/// itself returns `value` untouched.
pub(crate) fn convert_linear(
    table: &UnitTable,
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> ConversionResult<f64> {
    let unsupported = ConversionError::UnsupportedUnit(category);
    let from_factor = table.factor(from).ok_or(unsupported)?;
    let to_factor = table.factor(to).ok_or(unsupported)?;

    if from == to {
        return Ok(value);
    }

    Ok(value * from_factor / to_factor)
}
