//! Access layer - every read and write the handlers perform goes through here
//!
//! Lookups return `Ok(None)` when nothing matches and `Err(StoreError)` when
//! the store itself failed, so handlers can tell the two apart.

pub mod memory;
pub mod postgres;
pub mod traits;

use thiserror::Error;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use traits::{
    AstronomyStore, CalendarStore, ContentStore, CounterStore, CultureStore, EtymologyStore,
    PoetryStore,
};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{operation} failed: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{entity} already exists: {id}")]
    Conflict { entity: &'static str, id: i64 },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
