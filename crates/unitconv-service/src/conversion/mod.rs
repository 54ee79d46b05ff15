//! Conversion request handling.

pub mod service;

pub use service::ConversionService;
