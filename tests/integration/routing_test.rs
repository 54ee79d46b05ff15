//! Integration tests for redirects, health, and renderer failures.

mod helpers;

use std::sync::Arc;

use http::{StatusCode, header};

use unitconv_api::PageRenderer;
use unitconv_core::{AppError, AppResult, ViewState};

#[tokio::test]
async fn test_root_redirects_to_length() {
    let app = helpers::TestApp::new();

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.header(header::LOCATION), Some("/length"));
}

#[tokio::test]
async fn test_unknown_path_redirects_to_length() {
    let app = helpers::TestApp::new();

    let response = app.get("/volume").await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.header(header::LOCATION), Some("/length"));
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[derive(Debug)]
struct FailingRenderer;

impl PageRenderer for FailingRenderer {
    fn render(&self, _view: &ViewState) -> AppResult<String> {
        Err(AppError::render("template unavailable"))
    }
}

#[tokio::test]
async fn test_render_failure_is_internal_error() {
    let app = helpers::TestApp::with_renderer(Arc::new(FailingRenderer));

    let response = app
        .post_form(
            "/length",
            &[("value", "1"), ("from", "meter"), ("to", "kilometer")],
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.contains("template unavailable"));
}

#[tokio::test]
async fn test_validation_errors_never_change_status() {
    let app = helpers::TestApp::new();

    for value in ["", "abc", "1.2.3", "NaN"] {
        let response = app
            .post_form("/weight", &[("value", value), ("from", "gram")])
            .await;
        assert_eq!(response.status, StatusCode::OK, "{value:?}");
    }
}
