//! Router-wide JSON body check

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::types::json::{decode_body, has_json_content_type, JsonRejection};

/// Reject malformed JSON bodies on every route, whatever the method.
///
/// Requests without a JSON content type pass through untouched. Otherwise the
/// body is parsed once and the result is stored in the request extensions for
/// the `JsonBody` extractor.
pub async fn json_body_middleware(request: Request, next: Next) -> Response {
    if !has_json_content_type(request.headers()) {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();

    let bytes = match Bytes::from_request(Request::new(body), &()).await {
        Ok(bytes) => bytes,
        Err(rejection) => return JsonRejection::from(rejection).into_response(),
    };

    let parsed = match decode_body(&bytes) {
        Ok(parsed) => parsed,
        Err(rejection) => return rejection.into_response(),
    };

    let mut request = Request::from_parts(parts, Body::from(bytes));
    request.extensions_mut().insert(parsed);

    next.run(request).await
}
