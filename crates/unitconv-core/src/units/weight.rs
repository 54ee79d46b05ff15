//! Weight units, converted through kilograms.

use super::UnitTable;

/// Weight factors in kilograms.
pub const TABLE: UnitTable = UnitTable {
    entries: &[
        ("milligram", 1e-6),
        ("gram", 1e-3),
        ("kilogram", 1.0),
        ("ounce", 0.028349523125),
        ("pound", 0.45359237),
    ],
};

/// Weight unit names in the order shown to the user.
pub const UNITS: &[&str] = &["milligram", "gram", "kilogram", "ounce", "pound"];
