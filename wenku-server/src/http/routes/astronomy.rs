//! Astronomy knowledge endpoints

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
use crate::models::{AstronomyKnowledge, NewAstronomyKnowledge, ValidationError};

#[derive(Deserialize, Default)]
pub struct ConstellationParams {
    pub constellation: Option<String>,
}

#[derive(Deserialize)]
pub struct AddAstronomyRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub constellation: Option<String>,
    pub period: Option<String>,
}

impl TryFrom<AddAstronomyRequest> for NewAstronomyKnowledge {
    type Error = ValidationError;

    fn try_from(req: AddAstronomyRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required(req.title, "title")?,
            content: required(req.content, "content")?,
            constellation: req.constellation.unwrap_or_default(),
            period: req.period.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AstronomyResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub constellation: String,
    pub period: String,
}

impl From<AstronomyKnowledge> for AstronomyResponse {
    fn from(k: AstronomyKnowledge) -> Self {
        Self {
            id: k.id,
            title: k.title,
            content: k.content,
            constellation: k.constellation,
            period: k.period,
        }
    }
}

/// GET /api/astronomy/constellations?constellation=
///
/// An absent or empty name yields an empty list without touching the store.
async fn by_constellation(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<ConstellationParams>,
) -> Result<Envelope<Vec<AstronomyResponse>>, ApiError> {
    let Some(constellation) = non_empty(params.constellation) else {
        return Ok(Envelope(Vec::new()));
    };

    let entries = state
        .store
        .list_astronomy_by_constellation(&constellation)
        .await?;
    Ok(Envelope(entries.into_iter().map(AstronomyResponse::from).collect()))
}

/// POST /api/astronomy/add
async fn add_astronomy(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<AddAstronomyRequest>,
) -> Result<Envelope<CreatedResponse>, ApiError> {
    let entry = NewAstronomyKnowledge::try_from(req)?;
    let entry = state.store.insert_astronomy_knowledge(&entry).await?;

    tracing::info!(id = entry.id, constellation = %entry.constellation, "astronomy entry added");
    Ok(Envelope(CreatedResponse { id: entry.id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/astronomy/constellations", get(by_constellation))
        .route("/api/astronomy/add", post(add_astronomy))
}
