//! Temperature scales. Converted by formula through Celsius.

use std::str::FromStr;

use crate::error::ConversionError;
use crate::types::category::Category;

/// Temperature unit names in the order shown to the user.
pub const UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// A supported temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Convert a reading on this scale to Celsius.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Convert a Celsius reading to this scale.
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Self::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Celsius" => Ok(Self::Celsius),
            "Fahrenheit" => Ok(Self::Fahrenheit),
            "Kelvin" => Ok(Self::Kelvin),
            _ => Err(ConversionError::UnsupportedUnit(Category::Temperature)),
        }
    }
}
