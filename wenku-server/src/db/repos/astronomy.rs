//! Astronomy knowledge repository

use sqlx::PgPool;

use crate::models::{AstronomyKnowledge, NewAstronomyKnowledge};

pub struct AstronomyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AstronomyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> Result<Option<AstronomyKnowledge>, sqlx::Error> {
        sqlx::query_as::<_, AstronomyKnowledge>(
            r#"
            SELECT id, title, content, constellation, period, created_at
            FROM astronomy_knowledge
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
    }

    pub async fn list_by_constellation(
        &self,
        constellation: &str,
    ) -> Result<Vec<AstronomyKnowledge>, sqlx::Error> {
        sqlx::query_as::<_, AstronomyKnowledge>(
            r#"
            SELECT id, title, content, constellation, period, created_at
            FROM astronomy_knowledge
            WHERE constellation = $1
            ORDER BY id
            "#,
        )
        .bind(constellation)
        .fetch_all(self.pool)
        .await
    }

    pub async fn insert(
        &self,
        entry: &NewAstronomyKnowledge,
    ) -> Result<AstronomyKnowledge, sqlx::Error> {
        sqlx::query_as::<_, AstronomyKnowledge>(
            r#"
            INSERT INTO astronomy_knowledge (title, content, constellation, period)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, constellation, period, created_at
            "#,
        )
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(&entry.constellation)
        .bind(&entry.period)
        .fetch_one(self.pool)
        .await
    }
}
