//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps one method to one statement.
//! Errors are returned as raw `sqlx::Error`; the store layer decides how to
//! log and surface them.

pub mod astronomy;
pub mod calendar;
pub mod counter;
pub mod culture;
pub mod etymology;
pub mod poetry;

pub use astronomy::AstronomyRepo;
pub use calendar::CalendarRepo;
pub use counter::CounterRepo;
pub use culture::CultureRepo;
pub use etymology::EtymologyRepo;
pub use poetry::PoetryRepo;
