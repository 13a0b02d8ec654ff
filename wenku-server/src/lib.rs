//! wenku-server: HTTP lookups over a store of Chinese-culture reference data
//!
//! Poetry, character etymology, calendar, astronomy and cultural knowledge
//! behind a small JSON API, plus a demo request counter.
//!
//! The handlers only see the [`store::ContentStore`] trait; [`store::PgStore`]
//! backs it with Postgres and [`store::MemoryStore`] keeps everything in
//! process for tests and `--memory` runs.

pub mod db;
pub mod http;
pub mod models;
pub mod seed;
pub mod store;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use seed::{seed_samples, SeedPolicy, SeedReport};
pub use store::{ContentStore, MemoryStore, PgStore, StoreError};
