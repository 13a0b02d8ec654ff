//! Custom Axum extractors
//!
//! Rejections from the stock `Json`/`Query` extractors are turned into
//! validation envelopes instead of axum's plain-text responses. Text
//! containing NUL is rejected here since Postgres cannot store it.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::models::validation::reject_nul;
use crate::models::ValidationError;

/// JSON request body
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected request body");
                ApiError::Validation(ValidationError::MalformedBody)
            })?;

        check_json_text(&value)?;

        let value = serde_json::from_value(value).map_err(|err| {
            tracing::debug!(%err, "request body has unexpected shape");
            ApiError::Validation(ValidationError::MalformedBody)
        })?;

        Ok(Self(value))
    }
}

/// Every string and key in a JSON document, at any depth.
fn check_json_text(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(s) => reject_nul(s, "body"),
        Value::Array(items) => items.iter().try_for_each(check_json_text),
        Value::Object(map) => map.iter().try_for_each(|(key, item)| {
            reject_nul(key, "body")?;
            check_json_text(item)
        }),
        _ => Ok(()),
    }
}

/// Query string parameters
pub struct ValidQuery<T>(pub T);

fn malformed_query(rejection: impl std::fmt::Display) -> ApiError {
    tracing::debug!(%rejection, "rejected query string");
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "query",
        reason: "malformed query string",
    })
}

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) =
            Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(malformed_query)?;
        for (key, value) in &pairs {
            reject_nul(key, "query")?;
            reject_nul(value, "query")?;
        }

        let Query(value) = Query::<T>::try_from_uri(&parts.uri).map_err(malformed_query)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nul_is_found_at_any_depth() {
        assert!(check_json_text(&json!({"title": "静夜思", "n": 1, "x": null})).is_ok());
        assert!(check_json_text(&json!({"title": "a\u{0}b"})).is_err());
        assert!(check_json_text(&json!({"tags": ["茶", "\u{0}"]})).is_err());
        assert!(check_json_text(&json!({"a\u{0}": 1})).is_err());
    }
}
