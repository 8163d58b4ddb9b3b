use std::sync::Arc;

use poem::handler;
use poem::web::{Data, Json};

use business::domain::recommendation::use_cases::recommend::{
    RecommendProductsParams, RecommendProductsUseCase,
};

use crate::api::product::dto::ProductResponse;
use crate::api::recommendation::dto::RecommendRequest;

/// Recommendation endpoint.
///
/// Mounted as a plain poem route instead of an OpenAPI operation so that any
/// body, including one that is not JSON, reaches the lenient parser.
pub struct RecommendationApi {
    recommend_use_case: Arc<dyn RecommendProductsUseCase>,
}

impl RecommendationApi {
    pub fn new(recommend_use_case: Arc<dyn RecommendProductsUseCase>) -> Self {
        Self { recommend_use_case }
    }

    pub async fn recommend(&self, body: &[u8]) -> Vec<ProductResponse> {
        let request = RecommendRequest::from_body(body);

        self.recommend_use_case
            .execute(RecommendProductsParams {
                preference: request.preference,
            })
            .await
            .into_iter()
            .map(|p| p.into())
            .collect()
    }
}

/// `POST /recommend`: always 200 with a (possibly empty) product array.
#[handler]
pub async fn recommend(
    api: Data<&Arc<RecommendationApi>>,
    body: Vec<u8>,
) -> Json<Vec<ProductResponse>> {
    Json(api.recommend(&body).await)
}
