use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
    post,
};
use poem_openapi::OpenApiService;

use crate::api::recommendation::routes::recommend;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build_app(&addr, config.cors, container);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Assembles every route behind the CORS and tracing middleware.
    pub fn build_app(
        addr: &str,
        cors: Cors,
        container: DependencyContainer,
    ) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Product Recommender API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .at(
                "/recommend",
                post(recommend).data(container.recommendation_api),
            )
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }
}
