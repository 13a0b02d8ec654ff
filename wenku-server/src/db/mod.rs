//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One pool per process, opened at startup and closed at shutdown
//! - Every repository method is a single SQL statement
//! - Counter increments are an upsert, never read-modify-write

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
