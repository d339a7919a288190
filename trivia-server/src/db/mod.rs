//! Database layer - store port, adapters and connection pool
//!
//! # Design Principles
//!
//! - Handlers depend on the `TriviaStore` trait, never on a concrete adapter
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Each store call is its own unit of work; no multi-statement transactions

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgStore;
pub use store::{DbError, TriviaStore};
