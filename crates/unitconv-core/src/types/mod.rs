//! Shared domain types.

pub mod category;
pub mod outcome;
pub mod request;
pub mod view;

pub use category::{Category, CategoryDescriptor};
pub use outcome::ConversionOutcome;
pub use request::{ConversionRequest, RequestMode};
pub use view::ViewState;
