use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::recommendation::model::Preference;

pub struct RecommendProductsParams {
    pub preference: Preference,
}

/// Recommends catalog products for a free-text preference.
///
/// Always produces a (possibly empty) list: ranking failures degrade to the
/// price-ascending fallback instead of surfacing as errors.
#[async_trait]
pub trait RecommendProductsUseCase: Send + Sync {
    async fn execute(&self, params: RecommendProductsParams) -> Vec<Product>;
}
