//! # unitconv-core
//!
//! Core crate for the unit converter. Contains the unit tables, the
//! per-category converters, numeric input parsing, result formatting,
//! the request/outcome/view types, configuration schemas, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other unit converter crates.

pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod parse;
pub mod result;
pub mod types;
pub mod units;

pub use error::{AppError, ConversionError};
pub use result::{AppResult, ConversionResult};
pub use types::category::{Category, CategoryDescriptor};
pub use types::outcome::ConversionOutcome;
pub use types::request::{ConversionRequest, RequestMode};
pub use types::view::ViewState;
