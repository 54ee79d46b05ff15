//! Result of a submitted conversion.

use crate::error::ConversionError;
use crate::format::format_result;

/// Either a converted value or the reason the submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionOutcome {
    /// The value converted successfully, already rounded for display.
    Converted(f64),
    /// The submission failed validation or named an unknown unit.
    Rejected(ConversionError),
}

impl ConversionOutcome {
    /// The converted value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Converted(value) => Some(*value),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any.
    pub fn error(&self) -> Option<ConversionError> {
        match self {
            Self::Converted(_) => None,
            Self::Rejected(err) => Some(*err),
        }
    }

    /// Display text for the converted value.
    pub fn formatted(&self) -> Option<String> {
        self.value().map(format_result)
    }
}

impl From<Result<f64, ConversionError>> for ConversionOutcome {
    fn from(result: Result<f64, ConversionError>) -> Self {
        match result {
            Ok(value) => Self::Converted(value),
            Err(err) => Self::Rejected(err),
        }
    }
}
