//! Character etymology endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use super::{non_empty, CreatedResponse};
use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidQuery};
use crate::http::server::AppState;
use crate::models::validation::required;
use crate::models::{
    CharacterEtymology, Glyph, NewCharacterEtymology, StrokeCount, ValidationError,
};

#[derive(Deserialize, Default)]
pub struct CharacterParams {
    pub character: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct RadicalParams {
    pub radical: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct StrokeParams {
    pub count: Option<String>,
}

/// Add etymology request; everything but `character` is optional
#[derive(Deserialize)]
pub struct AddEtymologyRequest {
    pub character: Option<String>,
    pub pinyin: Option<String>,
    pub radical: Option<String>,
    pub stroke_count: Option<i32>,
    pub etymology: Option<String>,
    pub ancient_forms: Option<String>,
    pub meaning: Option<String>,
    pub extended_meanings: Option<String>,
    pub examples: Option<String>,
    pub stroke_order: Option<String>,
    pub dictionary_source: Option<String>,
}

impl TryFrom<AddEtymologyRequest> for NewCharacterEtymology {
    type Error = ValidationError;

    fn try_from(req: AddEtymologyRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            character: required(req.character, "character")?,
            pinyin: req.pinyin.unwrap_or_default(),
            radical: req.radical.unwrap_or_default(),
            stroke_count: req.stroke_count.unwrap_or_default(),
            etymology: req.etymology.unwrap_or_default(),
            ancient_forms: req.ancient_forms.unwrap_or_default(),
            meaning: req.meaning.unwrap_or_default(),
            extended_meanings: req.extended_meanings.unwrap_or_default(),
            examples: req.examples.unwrap_or_default(),
            stroke_order: req.stroke_order.unwrap_or_default(),
            dictionary_source: req.dictionary_source.unwrap_or_default(),
        })
    }
}

/// Full etymology entry, returned by the single-character lookup
#[derive(Debug, Serialize)]
pub struct CharacterDetailResponse {
    pub id: i64,
    pub character: String,
    pub pinyin: String,
    pub radical: String,
    pub stroke_count: i32,
    pub etymology: String,
    pub ancient_forms: String,
    pub meaning: String,
    pub extended_meanings: String,
    pub examples: String,
    pub stroke_order: String,
    pub dictionary_source: String,
}

impl From<CharacterEtymology> for CharacterDetailResponse {
    fn from(e: CharacterEtymology) -> Self {
        Self {
            id: e.id,
            character: e.character,
            pinyin: e.pinyin,
            radical: e.radical,
            stroke_count: e.stroke_count,
            etymology: e.etymology,
            ancient_forms: e.ancient_forms,
            meaning: e.meaning,
            extended_meanings: e.extended_meanings,
            examples: e.examples,
            stroke_order: e.stroke_order,
            dictionary_source: e.dictionary_source,
        }
    }
}

/// Short form used by the radical and stroke-count lists
#[derive(Debug, Serialize)]
pub struct CharacterSummaryResponse {
    pub id: i64,
    pub character: String,
    pub pinyin: String,
    pub radical: String,
    pub stroke_count: i32,
    pub meaning: String,
}

impl From<CharacterEtymology> for CharacterSummaryResponse {
    fn from(e: CharacterEtymology) -> Self {
        Self {
            id: e.id,
            character: e.character,
            pinyin: e.pinyin,
            radical: e.radical,
            stroke_count: e.stroke_count,
            meaning: e.meaning,
        }
    }
}

/// GET /api/etymology/search?character= - exact single-glyph lookup
async fn search_character(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<CharacterParams>,
) -> Result<Envelope<Option<CharacterDetailResponse>>, ApiError> {
    let glyph = Glyph::new(params.character.as_deref().unwrap_or_default())?;
    let entry = state
        .store
        .find_etymology_by_character(glyph.as_str())
        .await?;

    Ok(Envelope(entry.map(CharacterDetailResponse::from)))
}

/// GET /api/etymology/radical?radical=
async fn characters_by_radical(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<RadicalParams>,
) -> Result<Envelope<Vec<CharacterSummaryResponse>>, ApiError> {
    let radical = non_empty(params.radical).ok_or(ValidationError::Missing { field: "radical" })?;
    let entries = state.store.list_etymology_by_radical(&radical).await?;

    Ok(Envelope(
        entries.into_iter().map(CharacterSummaryResponse::from).collect(),
    ))
}

/// GET /api/etymology/strokes?count=
async fn characters_by_strokes(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<StrokeParams>,
) -> Result<Envelope<Vec<CharacterSummaryResponse>>, ApiError> {
    let count = StrokeCount::parse(params.count.as_deref().unwrap_or_default())?;
    let entries = state
        .store
        .list_etymology_by_stroke_count(count.get())
        .await?;

    Ok(Envelope(
        entries.into_iter().map(CharacterSummaryResponse::from).collect(),
    ))
}

/// POST /api/etymology/add
async fn add_etymology(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<AddEtymologyRequest>,
) -> Result<Envelope<CreatedResponse>, ApiError> {
    let entry = NewCharacterEtymology::try_from(req)?;
    let entry = state.store.insert_etymology(&entry).await?;

    tracing::info!(id = entry.id, character = %entry.character, "etymology added");
    Ok(Envelope(CreatedResponse { id: entry.id }))
}

/// Etymology routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/etymology/search", get(search_character))
        .route("/api/etymology/radical", get(characters_by_radical))
        .route("/api/etymology/strokes", get(characters_by_strokes))
        .route("/api/etymology/add", post(add_etymology))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::super::test_support::{app, app_with, get, post_json};
    use crate::seed::SeedPolicy;
    use crate::store::postgres::tests::unreachable_store;

    fn search_uri(character: &str) -> String {
        format!("/api/etymology/search?character={}", urlencoding::encode(character))
    }

    #[tokio::test]
    async fn seeded_character_returns_full_field_set() {
        let (app, _) = app();
        post_json(&app, "/api/init-data", json!({})).await;

        let (_, body) = get(&app, &search_uri("爱")).await;
        assert_eq!(body["code"], 0);
        let data = &body["data"];
        assert_eq!(data["character"], "爱");
        assert_eq!(data["pinyin"], "ài");
        assert_eq!(data["radical"], "爪");
        assert_eq!(data["stroke_count"], 10);
        assert_eq!(data["meaning"], "喜爱、关爱");
        assert_eq!(data["examples"], "爱心、爱情、爱国");
        assert_eq!(data.as_object().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn character_must_be_exactly_one_glyph() {
        let (app, _) = app();

        let (status, body) = get(&app, &search_uri("")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], -1);

        let (_, body) = get(&app, "/api/etymology/search").await;
        assert_eq!(body["code"], -1);

        let (_, body) = get(&app, &search_uri("爱心")).await;
        assert_eq!(body["code"], -1);
    }

    #[tokio::test]
    async fn unknown_character_is_null() {
        let (app, _) = app();
        let (_, body) = get(&app, &search_uri("龘")).await;
        assert_eq!(body, json!({"code": 0, "data": null}));
    }

    #[tokio::test]
    async fn radical_and_stroke_lists_use_summary_fields() {
        let (app, _) = app();
        post_json(&app, "/api/init-data", json!({})).await;

        let uri = format!("/api/etymology/radical?radical={}", urlencoding::encode("囗"));
        let (_, body) = get(&app, &uri).await;
        let list = body["data"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["character"], "国");
        assert_eq!(list[0].as_object().unwrap().len(), 6);
        assert!(list[0].get("etymology").is_none());

        let (_, body) = get(&app, "/api/etymology/strokes?count=8").await;
        let characters: Vec<_> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["character"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(characters, vec!["国", "学"]);
    }

    #[tokio::test]
    async fn list_parameters_are_validated() {
        let (app, _) = app();

        let (_, body) = get(&app, "/api/etymology/radical").await;
        assert_eq!(body, json!({"code": -1, "errorMsg": "radical is required"}));

        let (_, body) = get(&app, "/api/etymology/strokes?count=abc").await;
        assert_eq!(body["code"], -1);
        let (_, body) = get(&app, "/api/etymology/strokes").await;
        assert_eq!(body["code"], -1);
    }

    #[tokio::test]
    async fn add_round_trips_and_defaults() {
        let (app, _) = app();

        let (_, body) = post_json(
            &app,
            "/api/etymology/add",
            json!({"character": "水", "pinyin": "shuǐ", "stroke_count": 4}),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();

        let (_, body) = get(&app, &search_uri("水")).await;
        assert_eq!(body["data"]["id"], id);
        assert_eq!(body["data"]["pinyin"], "shuǐ");
        assert_eq!(body["data"]["stroke_count"], 4);
        assert_eq!(body["data"]["radical"], "");

        let (_, body) = post_json(&app, "/api/etymology/add", json!({"pinyin": "shuǐ"})).await;
        assert_eq!(body, json!({"code": -1, "errorMsg": "character is required"}));

        let (_, body) = post_json(
            &app,
            "/api/etymology/add",
            json!({"character": "水", "stroke_count": "four"}),
        )
        .await;
        assert_eq!(body["code"], -1);
    }

    // Postgres rejects NUL in text, so it must be caught before the store.
    #[tokio::test]
    async fn nul_character_is_a_validation_error() {
        let app = app_with(Arc::new(unreachable_store()), SeedPolicy::Append);

        let (status, body) = get(&app, "/api/etymology/search?character=%00").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"code": -1, "errorMsg": "query: must not contain NUL characters"})
        );

        let (status, body) =
            post_json(&app, "/api/etymology/add", json!({"character": "\u{0}"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], -1);
    }

    #[tokio::test]
    async fn list_reports_storage_failure() {
        let app = app_with(Arc::new(unreachable_store()), SeedPolicy::Append);

        let uri = format!("/api/etymology/radical?radical={}", urlencoding::encode("爪"));
        let (status, body) = get(&app, &uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"code": -1, "errorMsg": "storage unavailable"}));
    }
}
