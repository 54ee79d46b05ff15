//! Convenience result type aliases.

use crate::error::{AppError, ConversionError};

/// A specialized `Result` type for infrastructure operations.
pub type AppResult<T> = Result<T, AppError>;

/// Result of parsing or converting a single user-supplied value.
pub type ConversionResult<T> = Result<T, ConversionError>;
