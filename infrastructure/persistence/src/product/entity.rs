use serde::Deserialize;

use business::domain::product::model::Product;

/// Catalog record as stored in a JSON catalog file.
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub category: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::new(
            self.id,
            self.name.trim(),
            self.price,
            self.category.trim().to_lowercase(),
        )
    }
}
