//! JSON response bodies and the mapping from store errors to status codes.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use mockbase::MockbaseError;
use serde_json::Value;
use tracing::error;

/// Body sent when there is no value to echo back.
pub const EMPTY_OBJECT: &str = "{}";

/// Media type of every response body.
pub const APPLICATION_JSON: &str = "application/json";

/// [`APPLICATION_JSON`] as a header value.
pub fn application_json() -> HeaderValue {
    HeaderValue::from_static(APPLICATION_JSON)
}

/// Whether a route only reads the document or also writes it. The two kinds
/// report "nothing matched" with different status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// `GET` routes.
    Read,
    /// `POST`, `PUT`, `PATCH` and `DELETE` routes.
    Write,
}

/// Status code for a failed record operation.
///
/// Read routes answer 404 for anything the caller got wrong (unknown collection,
/// unknown record, unparsable id); write routes answer 422 for the same cases
/// and for unparsable bodies. Failures of the backing document itself are 500.
pub const fn error_status(err: &MockbaseError, access: Access) -> StatusCode {
    if !err.is_client_error() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    match access {
        Access::Read if err.is_not_found() => StatusCode::NOT_FOUND,
        Access::Read => {
            match *err {
                MockbaseError::InvalidRecordId { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::UNPROCESSABLE_ENTITY,
            }
        },
        Access::Write => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// A response whose body is `value`, pretty-printed with two-space indentation.
pub fn json_response(status: StatusCode, value: &Value) -> Response {
    let body = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        error!("Failed to serialize response body: {}", e);
        EMPTY_OBJECT.to_owned()
    });
    (status, [(CONTENT_TYPE, application_json())], body).into_response()
}

/// A response with the `{}` placeholder body.
pub fn empty_response(status: StatusCode) -> Response {
    (status, [(CONTENT_TYPE, application_json())], EMPTY_OBJECT).into_response()
}
