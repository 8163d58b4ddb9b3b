use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Read-only data source for the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every product, in catalog order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
