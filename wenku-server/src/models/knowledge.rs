//! Calendar, astronomy and cultural knowledge records

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Category tag used for the 24 solar terms
pub const SOLAR_TERM_CATEGORY: &str = "solar-term";

/// Category tag used for traditional festivals
pub const FESTIVAL_CATEGORY: &str = "festival";

/// Calendar knowledge record
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CalendarKnowledge {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub date_info: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendarKnowledge {
    pub title: String,
    pub content: String,
    pub category: String,
    pub date_info: String,
}

/// Astronomy knowledge record, keyed by constellation (lunar mansion) name
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AstronomyKnowledge {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub constellation: String,
    pub period: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAstronomyKnowledge {
    pub title: String,
    pub content: String,
    pub constellation: String,
    pub period: String,
}

/// Cultural knowledge record
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CulturalKnowledge {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCulturalKnowledge {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
}

impl CalendarKnowledge {
    pub(crate) fn from_new(id: i64, new: NewCalendarKnowledge) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            category: new.category,
            date_info: new.date_info,
            created_at: Utc::now(),
        }
    }
}

impl AstronomyKnowledge {
    pub(crate) fn from_new(id: i64, new: NewAstronomyKnowledge) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            constellation: new.constellation,
            period: new.period,
            created_at: Utc::now(),
        }
    }
}

impl CulturalKnowledge {
    pub(crate) fn from_new(id: i64, new: NewCulturalKnowledge) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: new.title,
            content: new.content,
            category: new.category,
            tags: new.tags,
            created_at: now,
            updated_at: now,
        }
    }
}
