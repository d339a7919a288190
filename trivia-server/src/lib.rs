//! trivia-server: HTTP API for the trivia app
//!
//! Serves categories and paginated questions, creates, deletes and searches
//! questions, and draws random unseen questions for quiz play. Storage sits
//! behind the [`db::TriviaStore`] trait with a Postgres and an in-memory
//! adapter.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
