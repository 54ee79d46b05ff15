//! State handed to the page renderer.

use crate::types::category::Category;
use crate::types::outcome::ConversionOutcome;

/// Everything the renderer needs to draw one page.
///
/// Built fresh for every request and dropped once the response is written.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Active category (tab).
    pub category: Category,
    /// Unit names offered in both selects.
    pub units: &'static [&'static str],
    /// Raw value text echoed back into the input.
    pub value: String,
    /// Selected source unit.
    pub from: String,
    /// Selected target unit.
    pub to: String,
    /// Conversion outcome; `None` when nothing was submitted.
    pub outcome: Option<ConversionOutcome>,
}

impl ViewState {
    /// Converted value, if the submission succeeded.
    pub fn result(&self) -> Option<f64> {
        self.outcome.as_ref().and_then(ConversionOutcome::value)
    }

    /// Error message, if the submission was rejected.
    pub fn error_message(&self) -> Option<String> {
        self.outcome
            .as_ref()
            .and_then(ConversionOutcome::error)
            .map(|err| err.to_string())
    }

    /// Converted value formatted for display.
    pub fn formatted_result(&self) -> Option<String> {
        self.outcome.as_ref().and_then(ConversionOutcome::formatted)
    }

    /// Input placeholder for the active category.
    pub fn placeholder(&self) -> &'static str {
        self.category.descriptor().placeholder
    }
}
