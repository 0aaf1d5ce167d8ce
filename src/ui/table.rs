use tabled::{settings::Style, Table, Tabled};

use crate::product::Product;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: format!("{:.2}", product.price),
        }
    }
}

/// Render products as a rounded terminal table
pub fn products_table(products: &[Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let rows: Vec<ProductRow> = products.iter().map(Into::into).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}
