//! Poetry records

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Poem record from the store
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Poem {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub dynasty: String,
    pub content: String,
    /// Comma-separated tag list, stored verbatim
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Poem to insert; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoem {
    pub title: String,
    pub author: String,
    pub dynasty: String,
    pub content: String,
    pub tags: String,
}

impl Poem {
    pub(crate) fn from_new(id: i64, new: NewPoem) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: new.title,
            author: new.author,
            dynasty: new.dynasty,
            content: new.content,
            tags: new.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Substring match across title, author, content and tags.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.title.contains(keyword)
            || self.author.contains(keyword)
            || self.content.contains(keyword)
            || self.tags.contains(keyword)
    }
}
