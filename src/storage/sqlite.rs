//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use crate::product::{Product, ProductDraft};
use super::schema;

/// SQLite-backed storage for product rows
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Insert a new product and return the assigned id.
    ///
    /// NULL name or price fails the table's NOT NULL constraint.
    pub fn insert_product(&self, draft: &ProductDraft) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO products (name, description, price) VALUES (?1, ?2, ?3)",
            params![draft.name, draft.description, draft.price],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List all products in the store's natural scan order
    pub fn list_products(&self) -> Result<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, description, price FROM products")?;

        let products = stmt
            .query_map([], |row| Self::row_to_product(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(products)
    }

    /// Get a product by id, `None` if no such row exists
    pub fn get_product(&self, id: i64) -> Result<Option<Product>> {
        self.conn
            .query_row(
                "SELECT id, name, description, price FROM products WHERE id = ?1",
                [id],
                |row| Self::row_to_product(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Overwrite all mutable fields of the row matching `id`.
    ///
    /// Returns the affected-row count. Zero rows affected (no such id)
    /// is a successful outcome, not an error; the caller decides whether
    /// it matters.
    pub fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<usize> {
        let affected = self.conn.execute(
            "UPDATE products SET name = ?1, description = ?2, price = ?3 WHERE id = ?4",
            params![draft.name, draft.description, draft.price, id],
        )?;
        Ok(affected)
    }

    /// Delete the row matching `id`, same zero-affected policy as update
    pub fn delete_product(&self, id: i64) -> Result<usize> {
        let affected = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1", [id])?;
        Ok(affected)
    }

    /// Count all products
    pub fn count_products(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            products: self.count_products()?,
        })
    }

    /// Helper to convert a row to a Product
    fn row_to_product(row: &rusqlite::Row) -> rusqlite::Result<Product> {
        Ok(Product {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            price: row.get(3)?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub products: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Products: {}", self.products)
    }
}
