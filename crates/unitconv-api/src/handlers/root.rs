//! Root and fallback redirect.

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use unitconv_core::Category;

/// GET / (and any unknown path) → 302 to the length converter.
pub async fn redirect_home() -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, Category::Length.path())],
    )
}
