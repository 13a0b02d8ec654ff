//! Character etymology records and lookup keys
//!
//! Lookups are by exact glyph, by radical, or by stroke count. The glyph and
//! stroke count are validated at construction so handlers never reach the
//! store with malformed input.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::ValidationError;

/// Character etymology record from the store
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CharacterEtymology {
    pub id: i64,
    pub character: String,
    pub pinyin: String,
    pub radical: String,
    pub stroke_count: i32,
    pub etymology: String,
    pub ancient_forms: String,
    pub meaning: String,
    pub extended_meanings: String,
    pub examples: String,
    pub stroke_order: String,
    pub dictionary_source: String,
    pub created_at: DateTime<Utc>,
}

/// Etymology entry to insert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCharacterEtymology {
    pub character: String,
    pub pinyin: String,
    pub radical: String,
    pub stroke_count: i32,
    pub etymology: String,
    pub ancient_forms: String,
    pub meaning: String,
    pub extended_meanings: String,
    pub examples: String,
    pub stroke_order: String,
    pub dictionary_source: String,
}

impl CharacterEtymology {
    pub(crate) fn from_new(id: i64, new: NewCharacterEtymology) -> Self {
        Self {
            id,
            character: new.character,
            pinyin: new.pinyin,
            radical: new.radical,
            stroke_count: new.stroke_count,
            etymology: new.etymology,
            ancient_forms: new.ancient_forms,
            meaning: new.meaning,
            extended_meanings: new.extended_meanings,
            examples: new.examples,
            stroke_order: new.stroke_order,
            dictionary_source: new.dictionary_source,
            created_at: Utc::now(),
        }
    }
}

/// A single character used as an exact-match lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph(String);

impl Glyph {
    /// Validate that `s` holds exactly one Unicode scalar value.
    ///
    /// ```
    /// use wenku_server::models::Glyph;
    ///
    /// assert!(Glyph::new("爱").is_ok());
    /// assert!(Glyph::new("爱心").is_err());
    /// assert!(Glyph::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ValidationError::Empty { field: "character" }),
            (Some(_), None) => Ok(Self(s.to_owned())),
            (Some(_), Some(_)) => Err(ValidationError::InvalidFormat {
                field: "character",
                reason: "only a single character can be looked up",
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Glyph {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Stroke count parsed from a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeCount(i32);

impl StrokeCount {
    /// Parse a stroke count made of ASCII digits only (no sign, no spaces).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Missing { field: "count" });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "count",
                reason: "must be a non-negative whole number",
            });
        }

        s.parse::<i32>().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "count",
            reason: "number is too large",
        })
    }

    pub fn get(self) -> i32 {
        self.0
    }
}
