use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use crate::catalog::seed_catalog;

/// Read-only catalog held in memory for the process lifetime.
pub struct InMemoryProductRepository {
    products: Arc<[Product]>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_seed_catalog_in_order() {
        let repository = InMemoryProductRepository::seeded();

        let products = repository.get_all().await.unwrap();

        assert_eq!(products.len(), 15);
        assert_eq!(products[0].name, "iPhone 13");
        assert_eq!(products[14].name, "Instant Pot Duo");
    }

    #[tokio::test]
    async fn should_serve_injected_products() {
        let repository =
            InMemoryProductRepository::new(vec![Product::new(42, "Steam Deck", 399, "console")]);

        let products = repository.get_all().await.unwrap();

        assert_eq!(products, vec![Product::new(42, "Steam Deck", 399, "console")]);
    }
}
