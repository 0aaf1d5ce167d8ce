//! # Catalog - Product Catalog CRUD Service
//!
//! A small REST service over a file-backed SQLite store.
//!
//! Catalog provides:
//! - A `products` table owned by a SQLite-backed storage layer
//! - Row-level CRUD primitives (insert, list, get, update, delete)
//! - An axum HTTP API exposing the five product endpoints
//! - A companion CLI for operating on the store directly

pub mod config;
pub mod product;
pub mod server;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use product::{Product, ProductDraft};
pub use storage::SqliteStore;

/// Result type alias for Catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Catalog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
