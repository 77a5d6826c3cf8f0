//! Read-only HTTP API over Ghana's administrative regions and districts.

pub mod core;
pub mod features;
pub mod shared;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::{regions, system};

pub use crate::core::config::Config;
pub use crate::core::database::{create_pool, run_migrations};
pub use crate::core::error::AppError;
pub use crate::features::regions::models::{
    Coordinates, District, Region, SearchKind, SearchResult, Statistics,
};
pub use crate::features::regions::{RegionRepository, RegionService};

/// Assemble the full application router: feature routes, optional Swagger UI,
/// CORS, request ids and request tracing.
pub fn build_router(region_service: Arc<RegionService>, config: &Config) -> Router {
    let mut app = Router::new()
        .merge(system::routes::routes(Arc::clone(&region_service)))
        .merge(regions::routes::routes(region_service));

    if config.swagger.enabled {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: config.swagger.title.clone(),
            version: config.swagger.version.clone(),
            description: config.swagger.description.clone(),
        }
        .modify(&mut openapi);

        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));
    }

    // Layers run top to bottom: the id is set before tracing sees the request
    // and copied onto the response afterwards.
    app.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(middleware::MakeSpanWithRequestId)
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(middleware::cors_layer(
                config.app.cors_allowed_origins.clone(),
            )),
    )
}
