//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use unitconv_service::ConversionService;

use crate::view::{HtmlRenderer, PageRenderer};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Form validation and conversion
    pub conversion_service: Arc<ConversionService>,
    /// Page renderer
    pub renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    /// Builds state with the default HTML renderer.
    pub fn new() -> Self {
        Self::with_renderer(Arc::new(HtmlRenderer::new()))
    }

    /// Builds state with a custom renderer.
    pub fn with_renderer(renderer: Arc<dyn PageRenderer>) -> Self {
        Self {
            conversion_service: Arc::new(ConversionService::new()),
            renderer,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
