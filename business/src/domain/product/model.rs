use serde::{Deserialize, Serialize};

/// A catalog entry. Names are unique within a catalog, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub category: String,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: u64, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    /// Case-insensitive name comparison against an already lowercased name.
    pub fn has_name(&self, lowercased: &str) -> bool {
        self.name.to_lowercase() == lowercased
    }
}
