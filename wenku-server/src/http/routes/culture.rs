//! Cultural knowledge endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use super::CreatedResponse;
use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidQuery};
use crate::http::server::AppState;
use crate::models::validation::required;
use crate::models::{CulturalKnowledge, NewCulturalKnowledge, ValidationError};

/// Category filter. Unlike the other lookups an empty value is a real
/// category and is matched literally.
#[derive(Deserialize, Default)]
pub struct CategoryParams {
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct AddCultureRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
}

impl TryFrom<AddCultureRequest> for NewCulturalKnowledge {
    type Error = ValidationError;

    fn try_from(req: AddCultureRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required(req.title, "title")?,
            content: required(req.content, "content")?,
            category: req.category.unwrap_or_default(),
            tags: req.tags.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CultureResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
}

impl From<CulturalKnowledge> for CultureResponse {
    fn from(k: CulturalKnowledge) -> Self {
        Self {
            id: k.id,
            title: k.title,
            content: k.content,
            category: k.category,
            tags: k.tags,
        }
    }
}

/// GET /api/culture/daily - one random entry or null
async fn daily(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<Option<CultureResponse>>, ApiError> {
    let entry = state.store.random_cultural_knowledge().await?;
    Ok(Envelope(entry.map(CultureResponse::from)))
}

/// GET /api/culture/category?category=
async fn by_category(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<CategoryParams>,
) -> Result<Envelope<Vec<CultureResponse>>, ApiError> {
    let category = params.category.unwrap_or_default();
    let entries = state.store.list_culture_by_category(&category).await?;
    Ok(Envelope(entries.into_iter().map(CultureResponse::from).collect()))
}

/// POST /api/culture/add
async fn add_culture(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<AddCultureRequest>,
) -> Result<Envelope<CreatedResponse>, ApiError> {
    let entry = NewCulturalKnowledge::try_from(req)?;
    let entry = state.store.insert_cultural_knowledge(&entry).await?;

    tracing::info!(id = entry.id, category = %entry.category, "cultural entry added");
    Ok(Envelope(CreatedResponse { id: entry.id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/culture/daily", get(daily))
        .route("/api/culture/category", get(by_category))
        .route("/api/culture/add", post(add_culture))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::super::test_support::{app, app_with, get, post_json};
    use crate::seed::SeedPolicy;
    use crate::store::postgres::tests::unreachable_store;

    #[tokio::test]
    async fn daily_is_null_until_something_is_added() {
        let (app, _) = app();
        let (_, body) = get(&app, "/api/culture/daily").await;
        assert_eq!(body, json!({"code": 0, "data": null}));

        let (_, body) = post_json(
            &app,
            "/api/culture/add",
            json!({"title": "茶道", "content": "以茶修身", "category": "习俗", "tags": "茶"}),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();

        let (_, body) = get(&app, "/api/culture/daily").await;
        assert_eq!(
            body,
            json!({"code": 0, "data": {
                "id": id,
                "title": "茶道",
                "content": "以茶修身",
                "category": "习俗",
                "tags": "茶"
            }})
        );
    }

    #[tokio::test]
    async fn category_filter_matches_exactly() {
        let (app, _) = app();
        post_json(
            &app,
            "/api/culture/add",
            json!({"title": "茶道", "content": "以茶修身", "category": "习俗"}),
        )
        .await;
        post_json(&app, "/api/culture/add", json!({"title": "无类", "content": "未分类"})).await;

        let uri = format!("/api/culture/category?category={}", urlencoding::encode("习俗"));
        let (_, body) = get(&app, &uri).await;
        let list = body["data"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["title"], "茶道");

        let uri = format!("/api/culture/category?category={}", urlencoding::encode("习"));
        let (_, body) = get(&app, &uri).await;
        assert_eq!(body, json!({"code": 0, "data": []}));
    }

    #[tokio::test]
    async fn missing_category_matches_uncategorized_rows() {
        let (app, _) = app();
        post_json(
            &app,
            "/api/culture/add",
            json!({"title": "茶道", "content": "以茶修身", "category": "习俗"}),
        )
        .await;
        post_json(&app, "/api/culture/add", json!({"title": "无类", "content": "未分类"})).await;

        for uri in ["/api/culture/category", "/api/culture/category?category="] {
            let (_, body) = get(&app, uri).await;
            let list = body["data"].as_array().unwrap();
            assert_eq!(list.len(), 1);
            assert_eq!(list[0]["title"], "无类");
            assert_eq!(list[0]["category"], "");
        }
    }

    #[tokio::test]
    async fn add_rejects_non_object_body() {
        let (app, _) = app();
        let (_, body) = post_json(&app, "/api/culture/add", json!(["茶道"])).await;
        assert_eq!(body["code"], -1);
        assert!(body["errorMsg"].as_str().unwrap().contains("JSON object"));
    }

    #[tokio::test]
    async fn nul_in_title_never_reaches_the_store() {
        let app = app_with(Arc::new(unreachable_store()), SeedPolicy::Append);

        let (status, body) = post_json(
            &app,
            "/api/culture/add",
            json!({"title": "a\u{0}b", "content": "c"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"code": -1, "errorMsg": "body: must not contain NUL characters"})
        );
    }

    #[tokio::test]
    async fn nul_is_rejected_by_the_memory_store_too() {
        let (app, _) = app();
        let (_, body) = post_json(
            &app,
            "/api/culture/add",
            json!({"title": "a\u{0}b", "content": "c"}),
        )
        .await;
        assert_eq!(body["code"], -1);

        let (_, body) = get(&app, "/api/culture/daily").await;
        assert_eq!(body, json!({"code": 0, "data": null}));
    }

    #[tokio::test]
    async fn add_reports_storage_failure() {
        let app = app_with(Arc::new(unreachable_store()), SeedPolicy::Append);

        let (status, body) = post_json(
            &app,
            "/api/culture/add",
            json!({"title": "茶道", "content": "以茶修身"}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"code": -1, "errorMsg": "storage unavailable"}));
    }
}
