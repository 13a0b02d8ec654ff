//! Success envelope shared by every `/api` endpoint
//!
//! Success is `{"code": 0, "data": ...}`. Errors use the same shape with
//! `code: -1` and an `errorMsg` field, see [`ApiError`](super::ApiError).

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Envelope code for a successful call
pub const CODE_OK: i32 = 0;

/// Envelope code for any failed call
pub const CODE_ERR: i32 = -1;

/// Successful payload wrapped as `{code: 0, data}`
#[derive(Debug)]
pub struct Envelope<T>(pub T);

#[derive(Serialize)]
struct Success<T> {
    code: i32,
    data: T,
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(Success {
            code: CODE_OK,
            data: self.0,
        })
        .into_response()
    }
}

impl Envelope<Value> {
    /// Acknowledgement with no payload: `{code: 0, data: {}}`
    pub fn empty() -> Self {
        Self(json!({}))
    }
}

/// Error body: `{code: -1, errorMsg}`
pub(crate) fn error_body(message: impl Into<String>) -> Value {
    json!({
        "code": CODE_ERR,
        "errorMsg": message.into(),
    })
}
