use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use business::domain::recommendation::services::TextGeneratorService;
use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::text_generator::TextGeneratorGemini;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::recommendation::recommend::RecommendProductsUseCaseImpl;

use crate::api::recommendation::routes::RecommendationApi;
use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub recommendation_api: Arc<RecommendationApi>,
}

impl DependencyContainer {
    pub fn new(repository: Arc<dyn ProductRepository>, gemini_config: &GeminiConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let ranker: Option<Arc<dyn TextGeneratorService>> = match &gemini_config.api_key {
            Some(api_key) => {
                let client = GeminiClient::new(
                    api_key.clone(),
                    gemini_config.model.clone(),
                    gemini_config.timeout,
                );
                tracing::info!("Ranking with Gemini model {}", gemini_config.model);
                let generator: Arc<dyn TextGeneratorService> =
                    Arc::new(TextGeneratorGemini::new(client));
                Some(generator)
            }
            None => {
                tracing::warn!(
                    "GEMINI_API_KEY not set. Recommendations will use the fallback ranking."
                );
                None
            }
        };
        let health_api = crate::api::health::routes::Api::new(ranker.is_some());

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });

        // Recommendation use cases
        let recommend_use_case = Arc::new(RecommendProductsUseCaseImpl {
            repository,
            ranker,
            ranking_timeout: gemini_config.timeout,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(get_all_use_case);
        let recommendation_api = Arc::new(RecommendationApi::new(recommend_use_case));

        Self {
            health_api,
            product_api,
            recommendation_api,
        }
    }
}
