use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use business::domain::product::model::Product;

use crate::product::entity::ProductEntity;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog.read_error")]
    ReadError(#[from] std::io::Error),
    #[error("catalog.invalid_format")]
    InvalidFormat(#[from] serde_json::Error),
    #[error("catalog.duplicated_id: {0}")]
    DuplicatedId(u32),
    #[error("catalog.duplicated_name: {0}")]
    DuplicatedName(String),
}

/// The built-in catalog served when no catalog file is configured.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "iPhone 13", 799, "mobile"),
        Product::new(2, "Samsung Galaxy S22", 699, "mobile"),
        Product::new(3, "Google Pixel 6a", 449, "mobile"),
        Product::new(4, "OnePlus 9", 599, "mobile"),
        Product::new(5, "Motorola G Power", 299, "mobile"),
        Product::new(6, "Sony WH-1000XM4 Headphones", 349, "electronics"),
        Product::new(7, "Bose QuietComfort 35 II", 299, "electronics"),
        Product::new(8, "Dell XPS 13 Laptop", 999, "laptop"),
        Product::new(9, "MacBook Air M1", 1099, "laptop"),
        Product::new(10, "Apple Watch Series 7", 399, "wearable"),
        Product::new(11, "Fitbit Charge 5", 149, "wearable"),
        Product::new(12, "Canon EOS M50 Camera", 579, "camera"),
        Product::new(13, "Nikon D3500 Camera", 499, "camera"),
        Product::new(14, "KitchenAid Stand Mixer", 399, "appliance"),
        Product::new(15, "Instant Pot Duo", 99, "appliance"),
    ]
}

/// Parses a JSON array of products, rejecting duplicated ids or names.
///
/// Names are compared case-insensitively since ranking matches on them.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let entities: Vec<ProductEntity> = serde_json::from_str(json)?;
    let products: Vec<Product> = entities.into_iter().map(|e| e.into_domain()).collect();

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for product in &products {
        if !ids.insert(product.id) {
            return Err(CatalogError::DuplicatedId(product.id));
        }
        if !names.insert(product.name.to_lowercase()) {
            return Err(CatalogError::DuplicatedName(product.name.clone()));
        }
    }

    Ok(products)
}

/// Reads and validates a catalog file.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let products = parse_catalog(&json)?;
    tracing::info!(
        "Loaded {} products from catalog file {}",
        products.len(),
        path.display()
    );
    Ok(products)
}
