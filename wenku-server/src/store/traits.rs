use async_trait::async_trait;

use crate::models::{
    AstronomyKnowledge, CalendarKnowledge, CharacterEtymology, Counter, CulturalKnowledge,
    NewAstronomyKnowledge, NewCalendarKnowledge, NewCharacterEtymology, NewCulturalKnowledge,
    NewPoem, Poem,
};

use super::Result;

/// Store for the singleton request counter.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Gets a counter row by id.
    async fn get_counter(&self, id: i64) -> Result<Option<Counter>>;

    /// Inserts a counter row with the caller's id.
    async fn insert_counter(&self, counter: &Counter) -> Result<()>;

    /// Persists the caller's count and timestamp if the row still exists.
    ///
    /// A row that vanished in the meantime is a silent no-op.
    async fn update_counter(&self, counter: &Counter) -> Result<()>;

    /// Creates the row at 1 or adds one to it, atomically.
    async fn increment_counter(&self, id: i64) -> Result<Counter>;

    /// Deletes the row; deleting a missing row is a no-op.
    async fn delete_counter(&self, id: i64) -> Result<()>;
}

/// Store for poems.
#[async_trait]
pub trait PoetryStore: Send + Sync {
    async fn get_poem(&self, id: i64) -> Result<Option<Poem>>;

    /// Inserts a poem and returns it with its assigned id.
    async fn insert_poem(&self, poem: &NewPoem) -> Result<Poem>;

    /// Substring match over title, author, content and tags.
    async fn search_poems_by_keyword(&self, keyword: &str) -> Result<Vec<Poem>>;

    /// Substring match over author only.
    async fn search_poems_by_author(&self, author: &str) -> Result<Vec<Poem>>;

    /// A uniformly random poem, or `None` when the table is empty.
    async fn random_poem(&self) -> Result<Option<Poem>>;
}

/// Store for character etymology entries.
#[async_trait]
pub trait EtymologyStore: Send + Sync {
    async fn get_etymology(&self, id: i64) -> Result<Option<CharacterEtymology>>;

    /// First entry for an exact glyph.
    async fn find_etymology_by_character(
        &self,
        character: &str,
    ) -> Result<Option<CharacterEtymology>>;

    async fn list_etymology_by_radical(&self, radical: &str) -> Result<Vec<CharacterEtymology>>;

    async fn list_etymology_by_stroke_count(
        &self,
        stroke_count: i32,
    ) -> Result<Vec<CharacterEtymology>>;

    async fn insert_etymology(&self, entry: &NewCharacterEtymology) -> Result<CharacterEtymology>;
}

/// Store for calendar knowledge.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    async fn get_calendar_knowledge(&self, id: i64) -> Result<Option<CalendarKnowledge>>;

    async fn list_calendar_by_category(&self, category: &str) -> Result<Vec<CalendarKnowledge>>;

    async fn insert_calendar_knowledge(
        &self,
        entry: &NewCalendarKnowledge,
    ) -> Result<CalendarKnowledge>;
}

/// Store for astronomy knowledge.
#[async_trait]
pub trait AstronomyStore: Send + Sync {
    async fn get_astronomy_knowledge(&self, id: i64) -> Result<Option<AstronomyKnowledge>>;

    async fn list_astronomy_by_constellation(
        &self,
        constellation: &str,
    ) -> Result<Vec<AstronomyKnowledge>>;

    async fn insert_astronomy_knowledge(
        &self,
        entry: &NewAstronomyKnowledge,
    ) -> Result<AstronomyKnowledge>;
}

/// Store for cultural knowledge.
#[async_trait]
pub trait CultureStore: Send + Sync {
    async fn get_cultural_knowledge(&self, id: i64) -> Result<Option<CulturalKnowledge>>;

    async fn list_culture_by_category(&self, category: &str) -> Result<Vec<CulturalKnowledge>>;

    /// A uniformly random entry, or `None` when the table is empty.
    async fn random_cultural_knowledge(&self) -> Result<Option<CulturalKnowledge>>;

    async fn insert_cultural_knowledge(
        &self,
        entry: &NewCulturalKnowledge,
    ) -> Result<CulturalKnowledge>;
}

/// Every content domain behind one handle.
pub trait ContentStore:
    CounterStore + PoetryStore + EtymologyStore + CalendarStore + AstronomyStore + CultureStore
{
}

impl<T> ContentStore for T where
    T: CounterStore + PoetryStore + EtymologyStore + CalendarStore + AstronomyStore + CultureStore
{
}
