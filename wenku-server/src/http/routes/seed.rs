//! Sample-data endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Router};
use serde::Serialize;

use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::seed::seed_samples;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
    pub poems: usize,
    pub characters: usize,
}

/// POST /api/init-data - insert the sample poems and characters
async fn init_data(State(state): State<Arc<AppState>>) -> Result<Envelope<SeedResponse>, ApiError> {
    let report = seed_samples(state.store.as_ref(), state.seed_policy).await?;

    Ok(Envelope(SeedResponse {
        message: "数据初始化成功",
        poems: report.poems,
        characters: report.characters,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/init-data", post(init_data))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::super::test_support::{app, app_with, get, post_json};
    use crate::seed::SeedPolicy;
    use crate::store::MemoryStore;

    fn author_uri() -> String {
        format!("/api/poetry/search?author={}", urlencoding::encode("李白"))
    }

    #[tokio::test]
    async fn append_policy_duplicates_samples() {
        let (app, _) = app();

        let (status, body) = post_json(&app, "/api/init-data", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"code": 0, "data": {
                "message": "数据初始化成功",
                "poems": 2,
                "characters": 3
            }})
        );

        post_json(&app, "/api/init-data", json!({})).await;
        let (_, body) = get(&app, &author_uri()).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn skip_existing_policy_is_idempotent() {
        let app = app_with(Arc::new(MemoryStore::new()), SeedPolicy::SkipExisting);

        post_json(&app, "/api/init-data", json!({})).await;
        let (_, body) = post_json(&app, "/api/init-data", json!({})).await;
        assert_eq!(body["data"]["poems"], 0);
        assert_eq!(body["data"]["characters"], 0);

        let (_, body) = get(&app, &author_uri()).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }
}
