use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        // Region routes
        .route("/regions", get(handlers::list_regions))
        .route("/regions/{id_or_code}", get(handlers::get_region))
        .route(
            "/regions/{id_or_code}/districts",
            get(handlers::list_districts_by_region),
        )
        // District routes
        .route("/districts", get(handlers::list_districts))
        .route("/districts/{id_or_code}", get(handlers::get_district))
        // Search & statistics
        .route("/search", get(handlers::search))
        .route("/statistics", get(handlers::get_statistics))
        .with_state(service)
}
