//! Calendar knowledge endpoints (solar terms and festivals)

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
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::validation::required;
use crate::models::{
    CalendarKnowledge, NewCalendarKnowledge, ValidationError, FESTIVAL_CATEGORY,
    SOLAR_TERM_CATEGORY,
};

#[derive(Deserialize)]
pub struct AddCalendarRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub date_info: Option<String>,
}

impl TryFrom<AddCalendarRequest> for NewCalendarKnowledge {
    type Error = ValidationError;

    fn try_from(req: AddCalendarRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required(req.title, "title")?,
            content: required(req.content, "content")?,
            category: req.category.unwrap_or_default(),
            date_info: req.date_info.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date_info: String,
}

impl From<CalendarKnowledge> for CalendarResponse {
    fn from(k: CalendarKnowledge) -> Self {
        Self {
            id: k.id,
            title: k.title,
            content: k.content,
            date_info: k.date_info,
        }
    }
}

async fn list_category(
    state: &AppState,
    category: &str,
) -> Result<Envelope<Vec<CalendarResponse>>, ApiError> {
    let entries = state.store.list_calendar_by_category(category).await?;
    Ok(Envelope(entries.into_iter().map(CalendarResponse::from).collect()))
}

/// GET /api/calendar/solar-terms
async fn solar_terms(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<Vec<CalendarResponse>>, ApiError> {
    list_category(&state, SOLAR_TERM_CATEGORY).await
}

/// GET /api/calendar/festivals
async fn festivals(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<Vec<CalendarResponse>>, ApiError> {
    list_category(&state, FESTIVAL_CATEGORY).await
}

/// POST /api/calendar/add
async fn add_calendar(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<AddCalendarRequest>,
) -> Result<Envelope<CreatedResponse>, ApiError> {
    let entry = NewCalendarKnowledge::try_from(req)?;
    let entry = state.store.insert_calendar_knowledge(&entry).await?;

    tracing::info!(id = entry.id, category = %entry.category, "calendar entry added");
    Ok(Envelope(CreatedResponse { id: entry.id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/calendar/solar-terms", get(solar_terms))
        .route("/api/calendar/festivals", get(festivals))
        .route("/api/calendar/add", post(add_calendar))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::super::test_support::{app, app_with, get, post_json};
    use crate::seed::SeedPolicy;
    use crate::store::postgres::tests::unreachable_store;
    use crate::store::CalendarStore;

    #[tokio::test]
    async fn entries_are_listed_under_their_fixed_category() {
        let (app, _) = app();

        let (_, body) = post_json(
            &app,
            "/api/calendar/add",
            json!({
                "title": "立春",
                "content": "二十四节气之首",
                "category": "solar-term",
                "date_info": "2月3日-5日"
            }),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();
        post_json(
            &app,
            "/api/calendar/add",
            json!({"title": "春节", "content": "农历新年", "category": "festival"}),
        )
        .await;

        let (_, body) = get(&app, "/api/calendar/solar-terms").await;
        assert_eq!(
            body,
            json!({"code": 0, "data": [{
                "id": id,
                "title": "立春",
                "content": "二十四节气之首",
                "date_info": "2月3日-5日"
            }]})
        );

        let (_, body) = get(&app, "/api/calendar/festivals").await;
        let list = body["data"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["title"], "春节");
        assert_eq!(list[0]["date_info"], "");
    }

    #[tokio::test]
    async fn other_categories_are_not_listed() {
        let (app, store) = app();
        let (_, body) = post_json(
            &app,
            "/api/calendar/add",
            json!({"title": "腊八", "content": "腊月初八"}),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();
        assert_eq!(store.get_calendar_knowledge(id).await.unwrap().unwrap().category, "");

        let (_, body) = get(&app, "/api/calendar/festivals").await;
        assert_eq!(body, json!({"code": 0, "data": []}));
        let (_, body) = get(&app, "/api/calendar/solar-terms").await;
        assert_eq!(body, json!({"code": 0, "data": []}));
    }

    #[tokio::test]
    async fn add_requires_title_and_content() {
        let (app, _) = app();
        let (_, body) = post_json(&app, "/api/calendar/add", json!({"title": "立春"})).await;
        assert_eq!(body, json!({"code": -1, "errorMsg": "content is required"}));
    }

    #[tokio::test]
    async fn fixed_category_list_reports_storage_failure() {
        let app = app_with(Arc::new(unreachable_store()), SeedPolicy::Append);

        let (status, body) = get(&app, "/api/calendar/festivals").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"code": -1, "errorMsg": "storage unavailable"}));
    }
}
