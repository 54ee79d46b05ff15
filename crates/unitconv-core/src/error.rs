//! Unified application error types for the unit converter.
//!
//! Two layers live here. [`ConversionError`] covers user-input problems that
//! are always recovered at the request boundary and shown inside the page.
//! [`AppError`] covers infrastructure failures (configuration, I/O, page
//! rendering) and is what crates propagate with the `?` operator.

use std::fmt;
use thiserror::Error;

use crate::types::category::Category;

/// Validation failures produced while handling a single conversion request.
///
/// The `Display` text of each variant is the exact message shown to the
/// visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConversionError {
    /// The value field was blank after trimming.
    #[error("Please enter a value.")]
    EmptyInput,
    /// The value field could not be parsed as a finite number.
    #[error("Invalid number.")]
    InvalidNumber,
    /// The `from` or `to` unit is not known to the active category.
    #[error("Unsupported {0} unit.")]
    UnsupportedUnit(Category),
}

/// Top-level error kind categorization used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A configuration error occurred.
    Configuration,
    /// An I/O error occurred (socket bind, listener, etc.).
    Io,
    /// The page renderer failed to produce a document.
    Render,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Io => write!(f, "IO"),
            Self::Render => write!(f, "RENDER"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error.
///
/// Crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a render error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Render, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        Self::with_source(ErrorKind::Render, "Failed to write page", err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
