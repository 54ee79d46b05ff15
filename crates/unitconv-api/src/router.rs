//! Route definitions for the converter.
//!
//! Each category is served at its own path for GET and POST. The root path
//! and any unknown path redirect to the length converter.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use unitconv_core::Category;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(converter_routes())
        .merge(health_routes())
        .route("/", get(handlers::root::redirect_home))
        .fallback(handlers::root::redirect_home)
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// One GET/POST route per category
fn converter_routes() -> Router<AppState> {
    Category::ALL
        .into_iter()
        .fold(Router::new(), |router, category| {
            router.route(
                category.path(),
                handlers::convert::category_routes(category),
            )
        })
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
