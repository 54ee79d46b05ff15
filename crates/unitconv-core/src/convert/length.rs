//! Length conversion.

use crate::result::ConversionResult;
use crate::types::category::Category;
use crate::units::length::TABLE;

use super::convert_linear;

/// Convert a length between any two units of the length table.
pub fn convert_length(value: f64, from: &str, to: &str) -> ConversionResult<f64> {
    convert_linear(&TABLE, Category::Length, value, from, to)
}
