//! Shared request orchestration for every category.

use unitconv_core::format::round_result;
use unitconv_core::parse::parse_value;
use unitconv_core::{
    Category, CategoryDescriptor, ConversionOutcome, ConversionRequest, RequestMode, ViewState,
};

/// Validates submitted values and runs the category's converter.
///
/// Holds no state; one instance is shared by every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionService;

impl ConversionService {
    /// Creates a new conversion service.
    pub fn new() -> Self {
        Self
    }

    /// Builds the view for one request against `category`.
    ///
    /// Missing units fall back to the category defaults and the raw value
    /// is echoed unchanged. Only a [`RequestMode::Submitted`] request is
    /// parsed and converted; an idle request carries no outcome.
    pub fn handle(
        &self,
        category: Category,
        request: &ConversionRequest,
        mode: RequestMode,
    ) -> ViewState {
        let descriptor = category.descriptor();
        let from = request.from_or(descriptor.default_from);
        let to = request.to_or(descriptor.default_to);

        let outcome = match mode {
            RequestMode::Idle => None,
            RequestMode::Submitted => {
                Some(self.convert(descriptor, request.raw_value(), from, to))
            }
        };

        ViewState {
            category,
            units: descriptor.units,
            value: request.raw_value().to_string(),
            from: from.to_string(),
            to: to.to_string(),
            outcome,
        }
    }

    /// Parses `raw`, converts it, and rounds the result for display.
    ///
    /// A parse failure stops before the converter runs.
    pub fn convert(
        &self,
        descriptor: &CategoryDescriptor,
        raw: &str,
        from: &str,
        to: &str,
    ) -> ConversionOutcome {
        let category = descriptor.category;

        let result = parse_value(raw).and_then(|value| (descriptor.convert)(value, from, to));

        match result {
            Ok(converted) => {
                let rounded = round_result(converted);
                tracing::debug!(%category, from, to, result = rounded, "Converted value");
                ConversionOutcome::Converted(rounded)
            }
            Err(err) => {
                tracing::debug!(%category, from, to, error = %err, "Rejected conversion input");
                ConversionOutcome::Rejected(err)
            }
        }
    }
}
