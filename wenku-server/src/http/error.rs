//! API error types with IntoResponse
//!
//! Every error is rendered as the `{code: -1, errorMsg}` envelope.
//! Validation errors keep HTTP 200; store failures are logged and answered
//! with HTTP 500 and a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::envelope::error_body;
use crate::models::ValidationError;
use crate::store::StoreError;

/// Message returned to clients when the store fails
pub const STORAGE_UNAVAILABLE: &str = "storage unavailable";

/// API error type with automatic envelope mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request input rejected before touching the store (200)
    Validation(ValidationError),

    /// Store failure (500, logged)
    Storage(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (StatusCode::OK, error_body(e.to_string())),
            Self::Storage(e) => {
                // Log the actual error, return generic message
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_body(STORAGE_UNAVAILABLE),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Storage(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_keeps_200() {
        let err = ApiError::Validation(ValidationError::Missing { field: "action" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"code": -1, "errorMsg": "action is required"})
        );
    }

    #[tokio::test]
    async fn storage_error_is_500_and_hides_details() {
        let err = ApiError::Storage(StoreError::Database {
            operation: "get_poem",
            source: sqlx::Error::PoolTimedOut,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"code": -1, "errorMsg": STORAGE_UNAVAILABLE})
        );
    }
}
