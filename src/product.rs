//! Product entity - the single record the service persists.
//!
//! Two shapes:
//! - `Product`: a stored row, id assigned by the database
//! - `ProductDraft`: the mutable fields as they arrive in a request body

use serde::{Deserialize, Serialize};

/// A product row.
///
/// `id` is assigned by SQLite on insert, is unique, monotonically
/// increasing, and never reused after deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Primary key, assigned by the store
    pub id: i64,
    /// Display name, required
    pub name: String,
    /// Free-text description, optional
    pub description: Option<String>,
    /// Unit price, required
    pub price: f64,
}

/// The mutable fields of a product, as sent by a client.
///
/// All fields are optional at the type level. Required-ness is enforced
/// by the table's NOT NULL constraints, so a missing `name` or `price`
/// surfaces as a storage failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl ProductDraft {
    /// Build a draft from concrete parts (CLI and test convenience)
    pub fn new(name: impl Into<String>, description: Option<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            description,
            price: Some(price),
        }
    }
}
