//! Integration tests for the converter pages.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_length_post_shows_result() {
    let app = helpers::TestApp::new();

    let response = app
        .post_form(
            "/length",
            &[("value", "100"), ("from", "meter"), ("to", "kilometer")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response.body.contains("<strong>Result:</strong> 0.100000"),
        "body missing formatted result:\n{}",
        response.body
    );
    assert!(response.body.contains(r#"href="/length" class="active""#));
    assert!(!response.body.contains(r#"href="/weight" class="active""#));
}

#[tokio::test]
async fn test_weight_post_shows_result() {
    let app = helpers::TestApp::new();

    let response = app
        .post_form(
            "/weight",
            &[("value", "2500"), ("from", "gram"), ("to", "kilogram")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<strong>Result:</strong> 2.500000"));
    assert!(response.body.contains(r#"href="/weight" class="active""#));
}

#[tokio::test]
async fn test_temperature_post_shows_result() {
    let app = helpers::TestApp::new();

    let response = app
        .post_form(
            "/temperature",
            &[("value", "37"), ("from", "Celsius"), ("to", "Fahrenheit")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<strong>Result:</strong> 98.600000"));
    assert!(response.body.contains(r#"href="/temperature" class="active""#));
}

#[tokio::test]
async fn test_invalid_value_shows_error() {
    let app = helpers::TestApp::new();
    let cases = [
        ("/length", "meter", "kilometer"),
        ("/weight", "gram", "kilogram"),
        ("/temperature", "Celsius", "Kelvin"),
    ];

    for (path, from, to) in cases {
        let response = app
            .post_form(path, &[("value", "abc"), ("from", from), ("to", to)])
            .await;

        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.body.contains("Invalid number."), "{path}");
        assert!(!response.body.contains("Result:"), "{path}");
        assert!(response.body.contains(r#"value="abc""#), "{path}");
    }
}

#[tokio::test]
async fn test_empty_value_shows_error() {
    let app = helpers::TestApp::new();

    let response = app
        .post_form("/length", &[("value", ""), ("from", "meter"), ("to", "mile")])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Please enter a value."));
    assert!(!response.body.contains("Result:"));
}

#[tokio::test]
async fn test_unsupported_unit_shows_error() {
    let app = helpers::TestApp::new();

    let response = app
        .post_form(
            "/weight",
            &[("value", "1"), ("from", "stone"), ("to", "kilogram")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Unsupported weight unit."));

    let response = app
        .post_form(
            "/length",
            &[("value", "1"), ("from", "meter"), ("to", "Kelvin")],
        )
        .await;

    assert!(response.body.contains("Unsupported length unit."));
}

#[tokio::test]
async fn test_missing_units_fall_back_to_defaults() {
    let app = helpers::TestApp::new();

    let response = app.post_form("/temperature", &[("value", "100")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<strong>Result:</strong> 212.000000"));
    assert!(response.body.contains(r#"<option value="Celsius" selected>"#));
    assert!(response.body.contains(r#"<option value="Fahrenheit" selected>"#));
}

#[tokio::test]
async fn test_grouped_and_negative_values() {
    let app = helpers::TestApp::new();

    let response = app
        .post_form(
            "/length",
            &[("value", " 1,609.344 "), ("from", "meter"), ("to", "mile")],
        )
        .await;
    assert!(response.body.contains("<strong>Result:</strong> 1.000000"));
    assert!(response.body.contains(r#"value=" 1,609.344 ""#));

    let response = app
        .post_form(
            "/temperature",
            &[("value", "-40"), ("from", "Fahrenheit"), ("to", "Celsius")],
        )
        .await;
    assert!(response.body.contains("<strong>Result:</strong> -40.000000"));
}

#[tokio::test]
async fn test_get_renders_form_without_result() {
    let app = helpers::TestApp::new();

    let response = app.get("/weight").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header(http::header::CONTENT_TYPE),
        Some("text/html; charset=utf-8")
    );
    assert!(response.body.contains("<h2>Weight Converter</h2>"));
    assert!(response.body.contains(r#"<option value="gram" selected>"#));
    assert!(response.body.contains(r#"<option value="kilogram" selected>"#));
    assert!(!response.body.contains("Result:"));
    assert!(!response.body.contains(r#"class="error""#));
}

#[tokio::test]
async fn test_get_query_prefills_without_converting() {
    let app = helpers::TestApp::new();

    let response = app.get("/length?value=5&from=inch&to=foot").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"value="5""#));
    assert!(response.body.contains(r#"<option value="inch" selected>"#));
    assert!(response.body.contains(r#"<option value="foot" selected>"#));
    assert!(!response.body.contains("Result:"));
}

#[tokio::test]
async fn test_same_unit_returns_value() {
    let app = helpers::TestApp::new();

    let response = app
        .post_form(
            "/temperature",
            &[("value", "98.6"), ("from", "Fahrenheit"), ("to", "Fahrenheit")],
        )
        .await;

    assert!(response.body.contains("<strong>Result:</strong> 98.600000"));
}

#[tokio::test]
async fn test_repeated_form_field_uses_first_value() {
    let app = helpers::TestApp::new();

    let response = app
        .post_form(
            "/length",
            &[
                ("value", "100"),
                ("value", "5"),
                ("from", "meter"),
                ("to", "kilometer"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<strong>Result:</strong> 0.100000"));
    assert!(response.body.contains(r#"value="100""#));
    assert!(!response.body.contains(r#"class="error""#));
}

#[tokio::test]
async fn test_repeated_query_field_uses_first_value() {
    let app = helpers::TestApp::new();

    let response = app.get("/length?from=inch&from=foot&to=yard&value=3").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"value="3""#));
    assert!(response.body.contains(r#"<option value="inch" selected>"#));
    assert!(response.body.contains(r#"<option value="yard" selected>"#));
    assert!(!response.body.contains(r#"<option value="meter" selected>"#));
}
