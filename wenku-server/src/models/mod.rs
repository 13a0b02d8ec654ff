//! Domain records and validated lookup keys
//!
//! The six content domains are flat and independent: no record refers to
//! another. Insert records (`New*`) carry only caller-supplied fields; ids
//! and timestamps are assigned by the store.

pub mod counter;
pub mod etymology;
pub mod knowledge;
pub mod poem;
pub mod validation;

pub use counter::{Counter, CounterAction, COUNTER_ID};
pub use etymology::{CharacterEtymology, Glyph, NewCharacterEtymology, StrokeCount};
pub use knowledge::{
    AstronomyKnowledge, CalendarKnowledge, CulturalKnowledge, NewAstronomyKnowledge,
    NewCalendarKnowledge, NewCulturalKnowledge, FESTIVAL_CATEGORY, SOLAR_TERM_CATEGORY,
};
pub use poem::{NewPoem, Poem};
pub use validation::ValidationError;
