//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - products(id, name, description, price)

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, StoreStats};
