//! Static unit tables.
//!
//! Length and weight use a base-unit-factor model: every entry states how
//! many base units one of that unit is worth. Temperature has no factor
//! table and is converted by formula (see [`temperature`]).

pub mod length;
pub mod temperature;
pub mod weight;

/// Mapping from unit name to a multiplier against a common base unit.
///
/// Entries are kept in presentation order. Lookups are linear; tables hold
/// a handful of units and are never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitTable {
    /// `(unit name, factor)` pairs, `1 unit = factor × base`.
    pub entries: &'static [(&'static str, f64)],
}

impl UnitTable {
    /// Factor for `name`, or `None` when the unit is not in the table.
    pub fn factor(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(unit, _)| *unit == name)
            .map(|(_, factor)| *factor)
    }

    /// Unit names in presentation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(unit, _)| *unit)
    }
}
