//! # unitconv-service
//!
//! Service layer for the unit converter. Turns raw form input for one
//! category into the [`ViewState`](unitconv_core::ViewState) handed to the
//! renderer.

pub mod conversion;

pub use conversion::ConversionService;
