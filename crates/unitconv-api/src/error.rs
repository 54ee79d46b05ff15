//! Maps `AppError` to HTTP responses.
//!
//! Input validation problems never reach this point; they are rendered into
//! the page with a 200 status. Anything that does arrive here is a server
//! failure.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use unitconv_core::error::AppError;

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            err.message,
        )
            .into_response()
    }
}
