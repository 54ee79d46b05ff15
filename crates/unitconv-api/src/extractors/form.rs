//! `FormInput` extractor — reads `value`, `from`, and `to` from the request.

use axum::extract::{Form, FromRequest, Query, Request};
use axum::http::Method;

use unitconv_core::ConversionRequest;

/// Conversion fields pulled from the request, never rejected.
///
/// POST requests read the urlencoded body; fields missing from the body are
/// filled from the query string. Other methods read only the query string.
/// Input that cannot be decoded is logged and treated as an empty request,
/// so the page is still rendered.
#[derive(Debug, Clone, Default)]
pub struct FormInput(pub ConversionRequest);

impl std::ops::Deref for FormInput {
    type Target = ConversionRequest;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Decoded `key=value` pairs, repeats preserved in order.
type Pairs = Vec<(String, String)>;

impl<S> FromRequest<S> for FormInput
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = match Query::<Pairs>::try_from_uri(req.uri()) {
            Ok(Query(pairs)) => ConversionRequest::from_pairs(pairs),
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Ignoring malformed query string");
                ConversionRequest::default()
            }
        };

        if req.method() != Method::POST {
            return Ok(FormInput(query));
        }

        let body = match Form::<Pairs>::from_request(req, state).await {
            Ok(Form(pairs)) => ConversionRequest::from_pairs(pairs),
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Ignoring malformed form body");
                ConversionRequest::default()
            }
        };

        Ok(FormInput(body.or(query)))
    }
}
