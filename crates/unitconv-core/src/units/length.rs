//! Length units, converted through meters.

use super::UnitTable;

/// Length factors in meters.
pub const TABLE: UnitTable = UnitTable {
    entries: &[
        ("millimeter", 0.001),
        ("centimeter", 0.01),
        ("meter", 1.0),
        ("kilometer", 1000.0),
        ("inch", 0.0254),
        ("foot", 0.3048),
        ("yard", 0.9144),
        ("mile", 1609.344),
    ],
};

/// Length unit names in the order shown to the user.
pub const UNITS: &[&str] = &[
    "millimeter",
    "centimeter",
    "meter",
    "kilometer",
    "inch",
    "foot",
    "yard",
    "mile",
];
