//! Weight conversion.

use crate::result::ConversionResult;
use crate::types::category::Category;
use crate::units::weight::TABLE;

use super::convert_linear;

/// Convert a weight between any two units of the weight table.
pub fn convert_weight(value: f64, from: &str, to: &str) -> ConversionResult<f64> {
    convert_linear(&TABLE, Category::Weight, value, from, to)
}
