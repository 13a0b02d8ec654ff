//! Request counter - a singleton row bumped by `POST /api/count`

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::ValidationError;

/// The counter lives in a single row with this id.
pub const COUNTER_ID: i64 = 1;

/// Counter record
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Counter {
    pub id: i64,
    pub count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Counter {
    /// A fresh counter row holding its first increment.
    pub fn first(id: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            count: 1,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Mutation requested through `POST /api/count`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// Create the row at 1, or add one to it
    Inc,
    /// Delete the row (no-op when it is already gone)
    Clear,
}

impl CounterAction {
    /// Parse the `action` field of a count request.
    pub fn parse(action: Option<&str>) -> Result<Self, ValidationError> {
        match action {
            None => Err(ValidationError::Missing { field: "action" }),
            Some("inc") => Ok(Self::Inc),
            Some("clear") => Ok(Self::Clear),
            Some(other) => Err(ValidationError::InvalidVariant {
                field: "action",
                value: other.to_owned(),
            }),
        }
    }
}
