//! Converter page handlers, one route per category.

use axum::extract::State;
use axum::http::Method;
use axum::response::Html;
use axum::routing::{MethodRouter, get};

use unitconv_core::{Category, ConversionRequest, RequestMode};

use crate::error::ApiError;
use crate::extractors::FormInput;
use crate::state::AppState;

/// GET/POST routes for `category`.
///
/// GET shows the form with defaults and echoed query values; POST validates
/// and converts the submitted value.
pub fn category_routes(category: Category) -> MethodRouter<AppState> {
    let handler = move |State(state): State<AppState>, method: Method, FormInput(request): FormInput| async move {
        let mode = if method == Method::POST {
            RequestMode::Submitted
        } else {
            RequestMode::Idle
        };
        render_page(&state, category, &request, mode)
    };

    get(handler.clone()).post(handler)
}

/// Runs the orchestrator and hands the resulting view to the renderer.
pub fn render_page(
    state: &AppState,
    category: Category,
    request: &ConversionRequest,
    mode: RequestMode,
) -> Result<Html<String>, ApiError> {
    let view = state.conversion_service.handle(category, request, mode);
    let page = state.renderer.render(&view)?;
    Ok(Html(page))
}
