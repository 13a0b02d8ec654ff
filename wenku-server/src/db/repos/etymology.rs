//! Character etymology repository

use sqlx::PgPool;

use crate::models::{CharacterEtymology, NewCharacterEtymology};

/// Character etymology repository
pub struct EtymologyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EtymologyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> Result<Option<CharacterEtymology>, sqlx::Error> {
        sqlx::query_as::<_, CharacterEtymology>(
            r#"
            SELECT id, character, pinyin, radical, stroke_count, etymology, ancient_forms,
                   meaning, extended_meanings, examples, stroke_order, dictionary_source,
                   created_at
            FROM character_etymology
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
    }

    /// First entry (lowest id) for an exact glyph.
    pub async fn find_by_character(
        &self,
        character: &str,
    ) -> Result<Option<CharacterEtymology>, sqlx::Error> {
        sqlx::query_as::<_, CharacterEtymology>(
            r#"
            SELECT id, character, pinyin, radical, stroke_count, etymology, ancient_forms,
                   meaning, extended_meanings, examples, stroke_order, dictionary_source,
                   created_at
            FROM character_etymology
            WHERE character = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(character)
        .fetch_optional(self.pool)
        .await
    }

    pub async fn list_by_radical(
        &self,
        radical: &str,
    ) -> Result<Vec<CharacterEtymology>, sqlx::Error> {
        sqlx::query_as::<_, CharacterEtymology>(
            r#"
            SELECT id, character, pinyin, radical, stroke_count, etymology, ancient_forms,
                   meaning, extended_meanings, examples, stroke_order, dictionary_source,
                   created_at
            FROM character_etymology
            WHERE radical = $1
            ORDER BY id
            "#,
        )
        .bind(radical)
        .fetch_all(self.pool)
        .await
    }

    pub async fn list_by_stroke_count(
        &self,
        stroke_count: i32,
    ) -> Result<Vec<CharacterEtymology>, sqlx::Error> {
        sqlx::query_as::<_, CharacterEtymology>(
            r#"
            SELECT id, character, pinyin, radical, stroke_count, etymology, ancient_forms,
                   meaning, extended_meanings, examples, stroke_order, dictionary_source,
                   created_at
            FROM character_etymology
            WHERE stroke_count = $1
            ORDER BY id
            "#,
        )
        .bind(stroke_count)
        .fetch_all(self.pool)
        .await
    }

    pub async fn insert(
        &self,
        entry: &NewCharacterEtymology,
    ) -> Result<CharacterEtymology, sqlx::Error> {
        sqlx::query_as::<_, CharacterEtymology>(
            r#"
            INSERT INTO character_etymology (
                character, pinyin, radical, stroke_count, etymology, ancient_forms,
                meaning, extended_meanings, examples, stroke_order, dictionary_source
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, character, pinyin, radical, stroke_count, etymology, ancient_forms,
                      meaning, extended_meanings, examples, stroke_order, dictionary_source,
                      created_at
            "#,
        )
        .bind(&entry.character)
        .bind(&entry.pinyin)
        .bind(&entry.radical)
        .bind(entry.stroke_count)
        .bind(&entry.etymology)
        .bind(&entry.ancient_forms)
        .bind(&entry.meaning)
        .bind(&entry.extended_meanings)
        .bind(&entry.examples)
        .bind(&entry.stroke_order)
        .bind(&entry.dictionary_source)
        .fetch_one(self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_lookup_by_each_key() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations");

        // Unique radical so earlier runs don't show up in the list
        let radical = format!("部首-{}", chrono::Utc::now().timestamp_micros());
        let repo = EtymologyRepo::new(&pool);
        let entry = repo
            .insert(&NewCharacterEtymology {
                character: "水".into(),
                pinyin: "shuǐ".into(),
                radical: radical.clone(),
                stroke_count: 4,
                meaning: "河流".into(),
                ..Default::default()
            })
            .await
            .expect("insert");
        assert_eq!(entry.etymology, "");

        let fetched = repo.get(entry.id).await.expect("get").expect("row");
        assert_eq!(fetched, entry);

        let by_radical = repo.list_by_radical(&radical).await.expect("radical");
        assert_eq!(by_radical, vec![entry.clone()]);

        let by_strokes = repo.list_by_stroke_count(4).await.expect("strokes");
        assert!(by_strokes.iter().any(|e| e.id == entry.id));

        let first = repo
            .find_by_character("水")
            .await
            .expect("find")
            .expect("row");
        assert!(first.id <= entry.id);
    }
}
