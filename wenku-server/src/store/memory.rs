//! In-memory store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;

use crate::models::{
    AstronomyKnowledge, CalendarKnowledge, CharacterEtymology, Counter, CulturalKnowledge,
    NewAstronomyKnowledge, NewCalendarKnowledge, NewCharacterEtymology, NewCulturalKnowledge,
    NewPoem, Poem,
};

use super::traits::{
    AstronomyStore, CalendarStore, CounterStore, CultureStore, EtymologyStore, PoetryStore,
};
use super::{Result, StoreError};

/// Rows in insertion order plus the next id to hand out.
#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let row = build(self.next_id);
        self.next_id += 1;
        self.rows.push(row.clone());
        row
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.iter().find(|row| pred(row)).cloned()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.iter().filter(|row| pred(row)).cloned().collect()
    }

    fn random(&self) -> Option<T> {
        self.rows.choose(&mut rand::thread_rng()).cloned()
    }
}

#[derive(Debug)]
struct Tables {
    counters: BTreeMap<i64, Counter>,
    poems: Table<Poem>,
    etymology: Table<CharacterEtymology>,
    calendar: Table<CalendarKnowledge>,
    astronomy: Table<AstronomyKnowledge>,
    culture: Table<CulturalKnowledge>,
}

/// In-memory storage backend for tests and database-less demos.
///
/// Clones share the same tables. Data is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                counters: BTreeMap::new(),
                poems: Table::new(),
                etymology: Table::new(),
                calendar: Table::new(),
                astronomy: Table::new(),
                culture: Table::new(),
            })),
        }
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn get_counter(&self, id: i64) -> Result<Option<Counter>> {
        Ok(self.tables.read().await.counters.get(&id).cloned())
    }

    async fn insert_counter(&self, counter: &Counter) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.counters.contains_key(&counter.id) {
            return Err(StoreError::Conflict {
                entity: "counter",
                id: counter.id,
            });
        }
        tables.counters.insert(counter.id, counter.clone());
        Ok(())
    }

    async fn update_counter(&self, counter: &Counter) -> Result<()> {
        let mut tables = self.tables.write().await;
        if let Some(row) = tables.counters.get_mut(&counter.id) {
            row.count = counter.count;
            row.updated_at = counter.updated_at;
        }
        Ok(())
    }

    async fn increment_counter(&self, id: i64) -> Result<Counter> {
        let mut tables = self.tables.write().await;
        let row = tables
            .counters
            .entry(id)
            .and_modify(|row| {
                row.count += 1;
                row.updated_at = Utc::now();
            })
            .or_insert_with(|| Counter::first(id));
        Ok(row.clone())
    }

    async fn delete_counter(&self, id: i64) -> Result<()> {
        self.tables.write().await.counters.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PoetryStore for MemoryStore {
    async fn get_poem(&self, id: i64) -> Result<Option<Poem>> {
        Ok(self.tables.read().await.poems.find(|p| p.id == id))
    }

    async fn insert_poem(&self, poem: &NewPoem) -> Result<Poem> {
        let mut tables = self.tables.write().await;
        Ok(tables.poems.insert(|id| Poem::from_new(id, poem.clone())))
    }

    async fn search_poems_by_keyword(&self, keyword: &str) -> Result<Vec<Poem>> {
        Ok(self
            .tables
            .read()
            .await
            .poems
            .filter(|p| p.matches_keyword(keyword)))
    }

    async fn search_poems_by_author(&self, author: &str) -> Result<Vec<Poem>> {
        Ok(self
            .tables
            .read()
            .await
            .poems
            .filter(|p| p.author.contains(author)))
    }

    async fn random_poem(&self) -> Result<Option<Poem>> {
        Ok(self.tables.read().await.poems.random())
    }
}

#[async_trait]
impl EtymologyStore for MemoryStore {
    async fn get_etymology(&self, id: i64) -> Result<Option<CharacterEtymology>> {
        Ok(self.tables.read().await.etymology.find(|e| e.id == id))
    }

    async fn find_etymology_by_character(
        &self,
        character: &str,
    ) -> Result<Option<CharacterEtymology>> {
        Ok(self
            .tables
            .read()
            .await
            .etymology
            .find(|e| e.character == character))
    }

    async fn list_etymology_by_radical(&self, radical: &str) -> Result<Vec<CharacterEtymology>> {
        Ok(self
            .tables
            .read()
            .await
            .etymology
            .filter(|e| e.radical == radical))
    }

    async fn list_etymology_by_stroke_count(
        &self,
        stroke_count: i32,
    ) -> Result<Vec<CharacterEtymology>> {
        Ok(self
            .tables
            .read()
            .await
            .etymology
            .filter(|e| e.stroke_count == stroke_count))
    }

    async fn insert_etymology(&self, entry: &NewCharacterEtymology) -> Result<CharacterEtymology> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .etymology
            .insert(|id| CharacterEtymology::from_new(id, entry.clone())))
    }
}

#[async_trait]
impl CalendarStore for MemoryStore {
    async fn get_calendar_knowledge(&self, id: i64) -> Result<Option<CalendarKnowledge>> {
        Ok(self.tables.read().await.calendar.find(|k| k.id == id))
    }

    async fn list_calendar_by_category(&self, category: &str) -> Result<Vec<CalendarKnowledge>> {
        Ok(self
            .tables
            .read()
            .await
            .calendar
            .filter(|k| k.category == category))
    }

    async fn insert_calendar_knowledge(
        &self,
        entry: &NewCalendarKnowledge,
    ) -> Result<CalendarKnowledge> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .calendar
            .insert(|id| CalendarKnowledge::from_new(id, entry.clone())))
    }
}

#[async_trait]
impl AstronomyStore for MemoryStore {
    async fn get_astronomy_knowledge(&self, id: i64) -> Result<Option<AstronomyKnowledge>> {
        Ok(self.tables.read().await.astronomy.find(|k| k.id == id))
    }

    async fn list_astronomy_by_constellation(
        &self,
        constellation: &str,
    ) -> Result<Vec<AstronomyKnowledge>> {
        Ok(self
            .tables
            .read()
            .await
            .astronomy
            .filter(|k| k.constellation == constellation))
    }

    async fn insert_astronomy_knowledge(
        &self,
        entry: &NewAstronomyKnowledge,
    ) -> Result<AstronomyKnowledge> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .astronomy
            .insert(|id| AstronomyKnowledge::from_new(id, entry.clone())))
    }
}

#[async_trait]
impl CultureStore for MemoryStore {
    async fn get_cultural_knowledge(&self, id: i64) -> Result<Option<CulturalKnowledge>> {
        Ok(self.tables.read().await.culture.find(|k| k.id == id))
    }

    async fn list_culture_by_category(&self, category: &str) -> Result<Vec<CulturalKnowledge>> {
        Ok(self
            .tables
            .read()
            .await
            .culture
            .filter(|k| k.category == category))
    }

    async fn random_cultural_knowledge(&self) -> Result<Option<CulturalKnowledge>> {
        Ok(self.tables.read().await.culture.random())
    }

    async fn insert_cultural_knowledge(
        &self,
        entry: &NewCulturalKnowledge,
    ) -> Result<CulturalKnowledge> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .culture
            .insert(|id| CulturalKnowledge::from_new(id, entry.clone())))
    }
}
