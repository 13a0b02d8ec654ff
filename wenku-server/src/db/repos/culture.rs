//! Cultural knowledge repository

use sqlx::PgPool;

use crate::models::{CulturalKnowledge, NewCulturalKnowledge};

pub struct CultureRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CultureRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> Result<Option<CulturalKnowledge>, sqlx::Error> {
        sqlx::query_as::<_, CulturalKnowledge>(
            r#"
            SELECT id, title, content, category, tags, created_at, updated_at
            FROM cultural_knowledge
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
    }

    /// Exact category match; an empty string matches rows with an empty category.
    pub async fn list_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<CulturalKnowledge>, sqlx::Error> {
        sqlx::query_as::<_, CulturalKnowledge>(
            r#"
            SELECT id, title, content, category, tags, created_at, updated_at
            FROM cultural_knowledge
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await
    }

    pub async fn random(&self) -> Result<Option<CulturalKnowledge>, sqlx::Error> {
        sqlx::query_as::<_, CulturalKnowledge>(
            r#"
            SELECT id, title, content, category, tags, created_at, updated_at
            FROM cultural_knowledge
            ORDER BY random()
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await
    }

    pub async fn insert(
        &self,
        entry: &NewCulturalKnowledge,
    ) -> Result<CulturalKnowledge, sqlx::Error> {
        sqlx::query_as::<_, CulturalKnowledge>(
            r#"
            INSERT INTO cultural_knowledge (title, content, category, tags)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, category, tags, created_at, updated_at
            "#,
        )
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(&entry.category)
        .bind(&entry.tags)
        .fetch_one(self.pool)
        .await
    }
}
