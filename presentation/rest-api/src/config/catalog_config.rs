use persistence::catalog::load_catalog_file;
use persistence::product::repository::InMemoryProductRepository;
use std::env;

/// Initialize the product catalog
///
/// Environment variables:
/// - CATALOG_PATH: JSON catalog file (optional, defaults to the built-in catalog)
///
/// # Errors
/// Returns error if CATALOG_PATH is set but the file cannot be read or validated
pub fn init_catalog() -> anyhow::Result<InMemoryProductRepository> {
    match env::var("CATALOG_PATH") {
        Ok(path) if !path.trim().is_empty() => {
            let products = load_catalog_file(path.trim())?;
            Ok(InMemoryProductRepository::new(products))
        }
        _ => Ok(InMemoryProductRepository::seeded()),
    }
}
