//! JSON body extractor that reports errors in the API error format

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde_json::{Map, Value};

use super::error::ApiErrorResponse;

const INVALID_JSON: &str = "Invalid JSON";

/// Request body parsed into a generic JSON value
///
/// Bodies sent without a JSON content type, and empty bodies, are read as an
/// empty object. Only objects and arrays are accepted at the top level. When
/// `json_body_middleware` already parsed the body, the parsed value is reused.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl JsonBody {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> Value {
        self.0
    }

    fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl std::ops::Deref for JsonBody {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JSON rejection error that returns API error format
#[derive(Debug)]
pub struct JsonRejection {
    status: StatusCode,
    message: String,
}

impl JsonRejection {
    fn invalid_json() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: INVALID_JSON.to_string(),
        }
    }
}

impl From<BytesRejection> for JsonRejection {
    fn from(rejection: BytesRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        let response = ApiErrorResponse {
            error: self.message,
        };

        (self.status, AxumJson(response)).into_response()
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(parsed) = req.extensions_mut().remove::<JsonBody>() {
            return Ok(parsed);
        }

        if !has_json_content_type(req.headers()) {
            return Ok(JsonBody::empty());
        }

        let bytes = Bytes::from_request(req, state).await?;

        decode_body(&bytes)
    }
}

/// Decode a body sent with a JSON content type
pub(crate) fn decode_body(bytes: &[u8]) -> Result<JsonBody, JsonRejection> {
    if bytes.is_empty() {
        return Ok(JsonBody::empty());
    }

    parse_body(bytes)
}

fn parse_body(bytes: &[u8]) -> Result<JsonBody, JsonRejection> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) if value.is_object() || value.is_array() => Ok(JsonBody(value)),
        Ok(_) => Err(JsonRejection::invalid_json()),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected malformed JSON body");
            Err(JsonRejection::invalid_json())
        }
    }
}

pub(crate) fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
