use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::features::regions::RegionService;
use crate::features::system::dtos::{ApiInfoDto, HealthResponseDto};

/// API information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name, version and endpoint map", body = ApiInfoDto)
    ),
    tag = "system"
)]
pub async fn api_info() -> Json<ApiInfoDto> {
    Json(ApiInfoDto::current())
}

/// Health check against the data store
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponseDto),
        (status = 503, description = "Store unreachable", body = HealthResponseDto)
    ),
    tag = "system"
)]
pub async fn health_check(
    State(service): State<Arc<RegionService>>,
) -> (StatusCode, Json<HealthResponseDto>) {
    let health = service.health().await;
    let status = if health.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(health.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::features::regions::{RegionRepository, RegionService};
    use crate::features::system::routes;
    use crate::shared::test_helpers::create_seeded_pool;

    #[tokio::test]
    async fn test_health_reports_region_count() {
        let pool = create_seeded_pool().await;
        let service = Arc::new(RegionService::new(RegionRepository::new(pool), 50));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["regions_count"], 16);
    }

    #[tokio::test]
    async fn test_health_unavailable_when_store_closed() {
        let pool = create_seeded_pool().await;
        pool.close().await;
        let service = Arc::new(RegionService::new(RegionRepository::new(pool), 50));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let response = server.get("/health").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json();
        assert_eq!(body["status"], "unhealthy");
    }

    #[tokio::test]
    async fn test_api_info() {
        let pool = create_seeded_pool().await;
        let service = Arc::new(RegionService::new(RegionRepository::new(pool), 50));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let body: Value = server.get("/").await.json();
        assert_eq!(body["status"], "active");
        assert_eq!(body["endpoints"]["search"], "/search?q=query");
    }
}
