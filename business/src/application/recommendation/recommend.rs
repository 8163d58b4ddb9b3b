use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::recommendation::errors::{GenerationError, RankingError};
use crate::domain::recommendation::filter::filter_candidates;
use crate::domain::recommendation::model::{CandidateFilter, Preference, Ranking, RankingSource};
use crate::domain::recommendation::parser::parse_ranked_names;
use crate::domain::recommendation::prompt::build_instruction;
use crate::domain::recommendation::ranking::{fallback_rank, map_names_to_candidates};
use crate::domain::recommendation::services::TextGeneratorService;
use crate::domain::recommendation::use_cases::recommend::{
    RecommendProductsParams, RecommendProductsUseCase,
};

pub struct RecommendProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    /// `None` when no credential is configured; every request then uses the fallback.
    pub ranker: Option<Arc<dyn TextGeneratorService>>,
    pub ranking_timeout: Duration,
    pub logger: Arc<dyn Logger>,
}

impl RecommendProductsUseCaseImpl {
    async fn rank(&self, preference: &Preference, candidates: &[Product]) -> Ranking {
        match self.rank_with_model(preference, candidates).await {
            Ok(products) => {
                self.logger
                    .info(&format!("Model returned {} recommendations", products.len()));
                return Ranking {
                    products,
                    source: RankingSource::Model,
                };
            }
            Err(RankingError::NotConfigured) => self
                .logger
                .warn("Skipping model ranking because no text generator is configured"),
            Err(RankingError::Generation(err)) => self
                .logger
                .error(&format!("Model ranking call failed: {}", err)),
            Err(RankingError::Parse(err)) => self
                .logger
                .warn(&format!("Model response could not be parsed: {}", err)),
            Err(RankingError::NoMatches) => self
                .logger
                .info("Model response named none of the candidates"),
        }

        self.logger.info("Using fallback ranking");
        Ranking {
            products: fallback_rank(candidates),
            source: RankingSource::Fallback,
        }
    }

    async fn rank_with_model(
        &self,
        preference: &Preference,
        candidates: &[Product],
    ) -> Result<Vec<Product>, RankingError> {
        let ranker = self.ranker.as_ref().ok_or(RankingError::NotConfigured)?;
        let instruction = build_instruction(preference, candidates);

        let text = tokio::time::timeout(self.ranking_timeout, ranker.generate(&instruction))
            .await
            .map_err(|_| GenerationError::Timeout)??;

        let names = parse_ranked_names(&text)?;
        let ranked = map_names_to_candidates(&names, candidates);

        if ranked.is_empty() {
            return Err(RankingError::NoMatches);
        }
        Ok(ranked)
    }
}

#[async_trait]
impl RecommendProductsUseCase for RecommendProductsUseCaseImpl {
    async fn execute(&self, params: RecommendProductsParams) -> Vec<Product> {
        let preference = params.preference;

        let catalog = match self.repository.get_all().await {
            Ok(catalog) => catalog,
            Err(err) => {
                self.logger
                    .error(&format!("Could not load product catalog: {}", err));
                return vec![];
            }
        };

        let filter = CandidateFilter::from_preference(&preference);
        let candidates = filter_candidates(&catalog, &filter);
        self.logger.debug(&format!(
            "Preference '{}' matched rule '{}' with max price {:?}: {} candidates",
            preference,
            filter.rule,
            filter.max_price,
            candidates.len()
        ));

        if candidates.is_empty() {
            return vec![];
        }

        let ranking = self.rank(&preference, &candidates).await;
        self.logger.info(&format!(
            "Recommended {} products using {} ranking",
            ranking.products.len(),
            ranking.source
        ));

        ranking.products
    }
}
