//! HTTP server layer
//!
//! Axum server with:
//! - Uniform `{code, data}` / `{code, errorMsg}` envelopes
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use envelope::Envelope;
pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
