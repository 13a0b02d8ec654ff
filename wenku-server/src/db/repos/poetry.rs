//! Poetry repository
//!
//! Substring matching uses `strpos`, so `%` and `_` in a keyword are literal.

use sqlx::PgPool;

use crate::models::{NewPoem, Poem};

/// Poetry repository
pub struct PoetryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PoetryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> Result<Option<Poem>, sqlx::Error> {
        sqlx::query_as::<_, Poem>(
            r#"
            SELECT id, title, author, dynasty, content, tags, created_at, updated_at
            FROM poetry
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
    }

    pub async fn insert(&self, poem: &NewPoem) -> Result<Poem, sqlx::Error> {
        sqlx::query_as::<_, Poem>(
            r#"
            INSERT INTO poetry (title, author, dynasty, content, tags)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, dynasty, content, tags, created_at, updated_at
            "#,
        )
        .bind(&poem.title)
        .bind(&poem.author)
        .bind(&poem.dynasty)
        .bind(&poem.content)
        .bind(&poem.tags)
        .fetch_one(self.pool)
        .await
    }

    /// Poems whose title, author, content or tags contain `keyword`.
    pub async fn search_keyword(&self, keyword: &str) -> Result<Vec<Poem>, sqlx::Error> {
        sqlx::query_as::<_, Poem>(
            r#"
            SELECT id, title, author, dynasty, content, tags, created_at, updated_at
            FROM poetry
            WHERE strpos(title, $1) > 0
               OR strpos(author, $1) > 0
               OR strpos(content, $1) > 0
               OR strpos(tags, $1) > 0
            ORDER BY id
            "#,
        )
        .bind(keyword)
        .fetch_all(self.pool)
        .await
    }

    /// Poems whose author contains `author`.
    pub async fn search_author(&self, author: &str) -> Result<Vec<Poem>, sqlx::Error> {
        sqlx::query_as::<_, Poem>(
            r#"
            SELECT id, title, author, dynasty, content, tags, created_at, updated_at
            FROM poetry
            WHERE strpos(author, $1) > 0
            ORDER BY id
            "#,
        )
        .bind(author)
        .fetch_all(self.pool)
        .await
    }

    pub async fn random(&self) -> Result<Option<Poem>, sqlx::Error> {
        sqlx::query_as::<_, Poem>(
            r#"
            SELECT id, title, author, dynasty, content, tags, created_at, updated_at
            FROM poetry
            ORDER BY random()
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await
    }
}
