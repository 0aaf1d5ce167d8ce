//! Database schema definitions

/// SQL to create the products table
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    price REAL NOT NULL
)
"#;

/// All schema creation statements, safe to run on every startup
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_PRODUCTS_TABLE]
}
