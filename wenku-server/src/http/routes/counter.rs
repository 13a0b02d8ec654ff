//! Counter endpoints
//!
//! The counter is a two-state machine: no row, or a row at id 1.
//! `inc` creates or bumps the row; `clear` deletes it.

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CounterAction, COUNTER_ID};

/// Count request
#[derive(Deserialize)]
pub struct CountRequest {
    pub action: Option<String>,
}

/// GET /api/count - current count, 0 when no row exists
async fn get_count(State(state): State<Arc<AppState>>) -> Result<Envelope<i64>, ApiError> {
    let counter = state.store.get_counter(COUNTER_ID).await?;
    Ok(Envelope(counter.map_or(0, |c| c.count)))
}

/// POST /api/count - apply `inc` or `clear`
async fn update_count(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CountRequest>,
) -> Result<Envelope<Value>, ApiError> {
    match CounterAction::parse(req.action.as_deref())? {
        CounterAction::Inc => {
            let counter = state.store.increment_counter(COUNTER_ID).await?;
            tracing::debug!(count = counter.count, "counter incremented");
            Ok(Envelope(Value::from(counter.count)))
        }
        CounterAction::Clear => {
            state.store.delete_counter(COUNTER_ID).await?;
            tracing::debug!("counter cleared");
            Ok(Envelope::empty())
        }
    }
}

/// Counter routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/count", get(get_count).post(update_count))
}
