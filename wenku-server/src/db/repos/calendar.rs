//! Calendar knowledge repository

use sqlx::PgPool;

use crate::models::{CalendarKnowledge, NewCalendarKnowledge};

pub struct CalendarRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CalendarRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> Result<Option<CalendarKnowledge>, sqlx::Error> {
        sqlx::query_as::<_, CalendarKnowledge>(
            r#"
            SELECT id, title, content, category, date_info, created_at
            FROM calendar_knowledge
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
    }

    pub async fn list_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<CalendarKnowledge>, sqlx::Error> {
        sqlx::query_as::<_, CalendarKnowledge>(
            r#"
            SELECT id, title, content, category, date_info, created_at
            FROM calendar_knowledge
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await
    }

    pub async fn insert(
        &self,
        entry: &NewCalendarKnowledge,
    ) -> Result<CalendarKnowledge, sqlx::Error> {
        sqlx::query_as::<_, CalendarKnowledge>(
            r#"
            INSERT INTO calendar_knowledge (title, content, category, date_info)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, category, date_info, created_at
            "#,
        )
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(&entry.category)
        .bind(&entry.date_info)
        .fetch_one(self.pool)
        .await
    }
}
