use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    /// Product identifier, unique within the catalog
    pub id: u32,
    /// Product name
    pub name: String,
    /// Price in whole currency units
    pub price: u64,
    /// Category label, e.g. "mobile" or "laptop"
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            category: p.category,
        }
    }
}
