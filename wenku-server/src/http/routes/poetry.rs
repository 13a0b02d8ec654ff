//! Poetry endpoints

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
use crate::models::{NewPoem, Poem, ValidationError};

/// Search query; `keyword` wins when both are given
#[derive(Deserialize, Default)]
pub struct PoetrySearchParams {
    pub keyword: Option<String>,
    pub author: Option<String>,
}

/// Add poem request
#[derive(Deserialize)]
pub struct AddPoemRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub dynasty: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
}

impl TryFrom<AddPoemRequest> for NewPoem {
    type Error = ValidationError;

    fn try_from(req: AddPoemRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required(req.title, "title")?,
            author: required(req.author, "author")?,
            dynasty: required(req.dynasty, "dynasty")?,
            content: required(req.content, "content")?,
            tags: req.tags.unwrap_or_default(),
        })
    }
}

/// Poem response
#[derive(Debug, Serialize)]
pub struct PoemResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub dynasty: String,
    pub content: String,
    pub tags: String,
}

impl From<Poem> for PoemResponse {
    fn from(p: Poem) -> Self {
        Self {
            id: p.id,
            title: p.title,
            author: p.author,
            dynasty: p.dynasty,
            content: p.content,
            tags: p.tags,
        }
    }
}

/// GET /api/poetry/search - substring search by keyword or author
async fn search_poetry(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PoetrySearchParams>,
) -> Result<Envelope<Vec<PoemResponse>>, ApiError> {
    let poems = if let Some(keyword) = non_empty(params.keyword) {
        state.store.search_poems_by_keyword(&keyword).await?
    } else if let Some(author) = non_empty(params.author) {
        state.store.search_poems_by_author(&author).await?
    } else {
        Vec::new()
    };

    Ok(Envelope(poems.into_iter().map(PoemResponse::from).collect()))
}

/// GET /api/poetry/random - one random poem or null
async fn random_poetry(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<Option<PoemResponse>>, ApiError> {
    let poem = state.store.random_poem().await?;
    Ok(Envelope(poem.map(PoemResponse::from)))
}

/// POST /api/poetry/add - insert a poem
async fn add_poetry(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<AddPoemRequest>,
) -> Result<Envelope<CreatedResponse>, ApiError> {
    let poem = NewPoem::try_from(req)?;
    let poem = state.store.insert_poem(&poem).await?;

    tracing::info!(id = poem.id, title = %poem.title, "poem added");
    Ok(Envelope(CreatedResponse { id: poem.id }))
}

/// Poetry routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/poetry/search", get(search_poetry))
        .route("/api/poetry/random", get(random_poetry))
        .route("/api/poetry/add", post(add_poetry))
}
