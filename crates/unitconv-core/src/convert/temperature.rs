//! Temperature conversion, pivoting through Celsius.

use crate::result::ConversionResult;
use crate::units::temperature::TemperatureUnit;

/// Convert a temperature between Celsius, Fahrenheit, and Kelvin.
///
/// The source scale is validated first; an unknown source fails before the
/// target is looked at. Converting a scale to itself returns `value`
/// untouched.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> ConversionResult<f64> {
    let from: TemperatureUnit = from.parse()?;
    let celsius = from.to_celsius(value);

    let to: TemperatureUnit = to.parse()?;
    if from == to {
        return Ok(value);
    }

    Ok(to.from_celsius(celsius))
}
