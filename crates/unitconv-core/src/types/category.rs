//! Conversion categories and their descriptors.

use std::fmt;

use crate::convert::{ConvertFn, convert_length, convert_temperature, convert_weight};
use crate::units;

/// One of the supported kinds of measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Distances, converted through meters.
    Length,
    /// Masses, converted through kilograms.
    Weight,
    /// Temperature scales, converted through Celsius.
    Temperature,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Category; 3] = [Self::Length, Self::Weight, Self::Temperature];

    /// Lowercase identifier used in paths and messages.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
        }
    }

    /// Human-readable name for navigation and headings.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
        }
    }

    /// Request path serving this category.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Length => "/length",
            Self::Weight => "/weight",
            Self::Temperature => "/temperature",
        }
    }

    /// Static descriptor driving the shared request orchestration.
    pub fn descriptor(&self) -> &'static CategoryDescriptor {
        match self {
            Self::Length => &LENGTH,
            Self::Weight => &WEIGHT,
            Self::Temperature => &TEMPERATURE,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Everything that differs between categories.
///
/// The orchestrator is written once against this descriptor instead of once
/// per category.
#[derive(Debug)]
pub struct CategoryDescriptor {
    /// The category this descriptor belongs to.
    pub category: Category,
    /// Valid unit names, in presentation order.
    pub units: &'static [&'static str],
    /// Converter for this category.
    pub convert: ConvertFn,
    /// Source unit used when the request names none.
    pub default_from: &'static str,
    /// Target unit used when the request names none.
    pub default_to: &'static str,
    /// Example shown in the empty value input.
    pub placeholder: &'static str,
}

static LENGTH: CategoryDescriptor = CategoryDescriptor {
    category: Category::Length,
    units: units::length::UNITS,
    convert: convert_length,
    default_from: "meter",
    default_to: "kilometer",
    placeholder: "e.g. 123.45",
};

static WEIGHT: CategoryDescriptor = CategoryDescriptor {
    category: Category::Weight,
    units: units::weight::UNITS,
    convert: convert_weight,
    default_from: "gram",
    default_to: "kilogram",
    placeholder: "e.g. 2500",
};

static TEMPERATURE: CategoryDescriptor = CategoryDescriptor {
    category: Category::Temperature,
    units: units::temperature::UNITS,
    convert: convert_temperature,
    default_from: "Celsius",
    default_to: "Fahrenheit",
    placeholder: "e.g. 37",
};
