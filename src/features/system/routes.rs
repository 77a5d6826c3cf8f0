use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::RegionService;
use crate::features::system::handlers;

/// Create routes for the system feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/", get(handlers::api_info))
        .route("/health", get(handlers::health_check))
        .with_state(service)
}
