//! Postgres-backed store built on the sqlx repositories.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::repos::{
    AstronomyRepo, CalendarRepo, CounterRepo, CultureRepo, EtymologyRepo, PoetryRepo,
};
use crate::models::{
    AstronomyKnowledge, CalendarKnowledge, CharacterEtymology, Counter, CulturalKnowledge,
    NewAstronomyKnowledge, NewCalendarKnowledge, NewCharacterEtymology, NewCulturalKnowledge,
    NewPoem, Poem,
};

use super::traits::{
    AstronomyStore, CalendarStore, CounterStore, CultureStore, EtymologyStore, PoetryStore,
};
use super::{Result, StoreError};

/// Store handle over a shared connection pool.
///
/// Cheap to clone. Call [`PgStore::close`] on shutdown to drain the pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection, waiting for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Log a failed statement and wrap it with the operation name.
fn failed(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |source| {
        tracing::warn!(operation, error = %source, "store operation failed");
        StoreError::Database { operation, source }
    }
}

#[async_trait]
impl CounterStore for PgStore {
    async fn get_counter(&self, id: i64) -> Result<Option<Counter>> {
        CounterRepo::new(&self.pool)
            .get(id)
            .await
            .map_err(failed("get_counter"))
    }

    async fn insert_counter(&self, counter: &Counter) -> Result<()> {
        match CounterRepo::new(&self.pool).insert(counter).await {
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(StoreError::Conflict {
                entity: "counter",
                id: counter.id,
            }),
            result => result.map_err(failed("insert_counter")),
        }
    }

    async fn update_counter(&self, counter: &Counter) -> Result<()> {
        let updated = CounterRepo::new(&self.pool)
            .update(counter)
            .await
            .map_err(failed("update_counter"))?;
        if !updated {
            tracing::debug!(id = counter.id, "counter row vanished before update");
        }
        Ok(())
    }

    async fn increment_counter(&self, id: i64) -> Result<Counter> {
        CounterRepo::new(&self.pool)
            .increment(id)
            .await
            .map_err(failed("increment_counter"))
    }

    async fn delete_counter(&self, id: i64) -> Result<()> {
        CounterRepo::new(&self.pool)
            .delete(id)
            .await
            .map(|_| ())
            .map_err(failed("delete_counter"))
    }
}

#[async_trait]
impl PoetryStore for PgStore {
    async fn get_poem(&self, id: i64) -> Result<Option<Poem>> {
        PoetryRepo::new(&self.pool)
            .get(id)
            .await
            .map_err(failed("get_poem"))
    }

    async fn insert_poem(&self, poem: &NewPoem) -> Result<Poem> {
        PoetryRepo::new(&self.pool)
            .insert(poem)
            .await
            .map_err(failed("insert_poem"))
    }

    async fn search_poems_by_keyword(&self, keyword: &str) -> Result<Vec<Poem>> {
        PoetryRepo::new(&self.pool)
            .search_keyword(keyword)
            .await
            .map_err(failed("search_poems_by_keyword"))
    }

    async fn search_poems_by_author(&self, author: &str) -> Result<Vec<Poem>> {
        PoetryRepo::new(&self.pool)
            .search_author(author)
            .await
            .map_err(failed("search_poems_by_author"))
    }

    async fn random_poem(&self) -> Result<Option<Poem>> {
        PoetryRepo::new(&self.pool)
            .random()
            .await
            .map_err(failed("random_poem"))
    }
}

#[async_trait]
impl EtymologyStore for PgStore {
    async fn get_etymology(&self, id: i64) -> Result<Option<CharacterEtymology>> {
        EtymologyRepo::new(&self.pool)
            .get(id)
            .await
            .map_err(failed("get_etymology"))
    }

    async fn find_etymology_by_character(
        &self,
        character: &str,
    ) -> Result<Option<CharacterEtymology>> {
        EtymologyRepo::new(&self.pool)
            .find_by_character(character)
            .await
            .map_err(failed("find_etymology_by_character"))
    }

    async fn list_etymology_by_radical(&self, radical: &str) -> Result<Vec<CharacterEtymology>> {
        EtymologyRepo::new(&self.pool)
            .list_by_radical(radical)
            .await
            .map_err(failed("list_etymology_by_radical"))
    }

    async fn list_etymology_by_stroke_count(
        &self,
        stroke_count: i32,
    ) -> Result<Vec<CharacterEtymology>> {
        EtymologyRepo::new(&self.pool)
            .list_by_stroke_count(stroke_count)
            .await
            .map_err(failed("list_etymology_by_stroke_count"))
    }

    async fn insert_etymology(&self, entry: &NewCharacterEtymology) -> Result<CharacterEtymology> {
        EtymologyRepo::new(&self.pool)
            .insert(entry)
            .await
            .map_err(failed("insert_etymology"))
    }
}

#[async_trait]
impl CalendarStore for PgStore {
    async fn get_calendar_knowledge(&self, id: i64) -> Result<Option<CalendarKnowledge>> {
        CalendarRepo::new(&self.pool)
            .get(id)
            .await
            .map_err(failed("get_calendar_knowledge"))
    }

    async fn list_calendar_by_category(&self, category: &str) -> Result<Vec<CalendarKnowledge>> {
        CalendarRepo::new(&self.pool)
            .list_by_category(category)
            .await
            .map_err(failed("list_calendar_by_category"))
    }

    async fn insert_calendar_knowledge(
        &self,
        entry: &NewCalendarKnowledge,
    ) -> Result<CalendarKnowledge> {
        CalendarRepo::new(&self.pool)
            .insert(entry)
            .await
            .map_err(failed("insert_calendar_knowledge"))
    }
}

#[async_trait]
impl AstronomyStore for PgStore {
    async fn get_astronomy_knowledge(&self, id: i64) -> Result<Option<AstronomyKnowledge>> {
        AstronomyRepo::new(&self.pool)
            .get(id)
            .await
            .map_err(failed("get_astronomy_knowledge"))
    }

    async fn list_astronomy_by_constellation(
        &self,
        constellation: &str,
    ) -> Result<Vec<AstronomyKnowledge>> {
        AstronomyRepo::new(&self.pool)
            .list_by_constellation(constellation)
            .await
            .map_err(failed("list_astronomy_by_constellation"))
    }

    async fn insert_astronomy_knowledge(
        &self,
        entry: &NewAstronomyKnowledge,
    ) -> Result<AstronomyKnowledge> {
        AstronomyRepo::new(&self.pool)
            .insert(entry)
            .await
            .map_err(failed("insert_astronomy_knowledge"))
    }
}

#[async_trait]
impl CultureStore for PgStore {
    async fn get_cultural_knowledge(&self, id: i64) -> Result<Option<CulturalKnowledge>> {
        CultureRepo::new(&self.pool)
            .get(id)
            .await
            .map_err(failed("get_cultural_knowledge"))
    }

    async fn list_culture_by_category(&self, category: &str) -> Result<Vec<CulturalKnowledge>> {
        CultureRepo::new(&self.pool)
            .list_by_category(category)
            .await
            .map_err(failed("list_culture_by_category"))
    }

    async fn random_cultural_knowledge(&self) -> Result<Option<CulturalKnowledge>> {
        CultureRepo::new(&self.pool)
            .random()
            .await
            .map_err(failed("random_cultural_knowledge"))
    }

    async fn insert_cultural_knowledge(
        &self,
        entry: &NewCulturalKnowledge,
    ) -> Result<CulturalKnowledge> {
        CultureRepo::new(&self.pool)
            .insert(entry)
            .await
            .map_err(failed("insert_cultural_knowledge"))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use sqlx::postgres::PgPoolOptions;

    use super::*;

    /// A store whose pool can never hand out a connection.
    pub(crate) fn unreachable_store() -> PgStore {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(300))
            .connect_lazy("postgres://wenku@127.0.0.1:1/wenku")
            .expect("lazy pool");
        PgStore::new(pool)
    }

    #[tokio::test]
    async fn failures_surface_as_errors_not_absent() {
        let store = unreachable_store();

        let err = store.get_poem(1).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Database {
                operation: "get_poem",
                ..
            }
        ));

        assert!(store.random_cultural_knowledge().await.is_err());
        assert!(store.list_etymology_by_radical("爪").await.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_by_id_is_repeatable() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        crate::db::migrations::run(&pool).await.expect("migrations");
        let store = PgStore::new(pool);

        let inserted = store
            .insert_calendar_knowledge(&NewCalendarKnowledge {
                title: "立春".into(),
                content: "二十四节气之首".into(),
                category: "solar-term".into(),
                date_info: "2月3-5日".into(),
            })
            .await
            .expect("insert");

        let first = store.get_calendar_knowledge(inserted.id).await.expect("get");
        let second = store.get_calendar_knowledge(inserted.id).await.expect("get");
        assert_eq!(first, second);
        assert_eq!(first.map(|k| k.title), Some("立春".to_string()));
    }
}
