//! Counter repository
//!
//! - increment: INSERT .. ON CONFLICT DO UPDATE (atomic, no read-modify-write)
//! - update: plain UPDATE, a vanished row is a no-op

use sqlx::PgPool;

use crate::models::Counter;

/// Counter repository
pub struct CounterRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CounterRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> Result<Option<Counter>, sqlx::Error> {
        sqlx::query_as::<_, Counter>(
            "SELECT id, count, created_at, updated_at FROM counters WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
    }

    pub async fn insert(&self, counter: &Counter) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO counters (id, count, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(counter.id)
        .bind(counter.count)
        .bind(counter.created_at)
        .bind(counter.updated_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Persist the caller's count and timestamp. Returns false when the row is gone.
    pub async fn update(&self, counter: &Counter) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE counters SET count = $2, updated_at = $3 WHERE id = $1")
            .bind(counter.id)
            .bind(counter.count)
            .bind(counter.updated_at)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Create the row at 1 or add one to it, in a single statement.
    pub async fn increment(&self, id: i64) -> Result<Counter, sqlx::Error> {
        sqlx::query_as::<_, Counter>(
            r#"
            INSERT INTO counters (id, count) VALUES ($1, 1)
            ON CONFLICT (id) DO UPDATE
                SET count = counters.count + 1, updated_at = NOW()
            RETURNING id, count, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_one(self.pool)
        .await
    }

    /// Delete the row. Returns false when there was nothing to delete.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM counters WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use crate::models::COUNTER_ID;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p wenku-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn increment_creates_then_bumps() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations");

        let repo = CounterRepo::new(&pool);
        repo.delete(COUNTER_ID).await.expect("delete");

        assert_eq!(repo.increment(COUNTER_ID).await.expect("inc").count, 1);
        assert_eq!(repo.increment(COUNTER_ID).await.expect("inc").count, 2);

        assert!(repo.delete(COUNTER_ID).await.expect("delete"));
        assert!(!repo.delete(COUNTER_ID).await.expect("delete"));
        assert!(repo.get(COUNTER_ID).await.expect("get").is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_increments_do_not_race() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations");
        CounterRepo::new(&pool).delete(COUNTER_ID).await.expect("delete");

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    CounterRepo::new(&pool)
                        .increment(COUNTER_ID)
                        .await
                        .expect("concurrent increment failed")
                })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task panicked");
        }

        let counter = CounterRepo::new(&pool)
            .get(COUNTER_ID)
            .await
            .expect("get")
            .expect("row exists");
        assert_eq!(counter.count, 10);
    }
}
