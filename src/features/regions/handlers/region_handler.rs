use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::regions::dtos::{
    DistrictListQuery, DistrictResponseDto, RegionResponseDto, SearchQuery, SearchResultDto,
    StatisticsResponseDto,
};
use crate::features::regions::models::District;
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

// ==================== Region Handlers ====================

/// List all regions
#[utoipa::path(
    get,
    path = "/regions",
    responses(
        (status = 200, description = "List of regions ordered by name", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 503, description = "Data store unavailable")
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let regions = service.get_regions().await?;
    let dtos: Vec<RegionResponseDto> = regions.into_iter().map(Into::into).collect();
    let meta = Meta::total(dtos.len());
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// Get a region by id or code
#[utoipa::path(
    get,
    path = "/regions/{id_or_code}",
    params(
        ("id_or_code" = String, Path, description = "Region id or code (e.g. GR)")
    ),
    responses(
        (status = 200, description = "Region details", body = ApiResponse<RegionResponseDto>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<RegionService>>,
    Path(id_or_code): Path<String>,
) -> Result<Json<ApiResponse<RegionResponseDto>>> {
    let region = service.get_region(&id_or_code).await?;
    Ok(Json(ApiResponse::success(Some(region.into()), None, None)))
}

/// List districts in a region
#[utoipa::path(
    get,
    path = "/regions/{id_or_code}/districts",
    params(
        ("id_or_code" = String, Path, description = "Region id or code (e.g. GR)")
    ),
    responses(
        (status = 200, description = "Districts of the region ordered by name", body = ApiResponse<Vec<DistrictResponseDto>>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn list_districts_by_region(
    State(service): State<Arc<RegionService>>,
    Path(id_or_code): Path<String>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let districts = service.get_districts(Some(&id_or_code)).await?;
    Ok(Json(district_list(districts)))
}

// ==================== District Handlers ====================

/// List districts, optionally filtered by region
#[utoipa::path(
    get,
    path = "/districts",
    params(DistrictListQuery),
    responses(
        (status = 200, description = "List of districts", body = ApiResponse<Vec<DistrictResponseDto>>),
        (status = 404, description = "Region not found")
    ),
    tag = "districts"
)]
pub async fn list_districts(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<DistrictListQuery>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let region = query.region.as_deref().filter(|r| !r.is_empty());
    let districts = service.get_districts(region).await?;
    Ok(Json(district_list(districts)))
}

/// Get a district by id
#[utoipa::path(
    get,
    path = "/districts/{id_or_code}",
    params(
        ("id_or_code" = String, Path, description = "District id (e.g. GR-01)")
    ),
    responses(
        (status = 200, description = "District details", body = ApiResponse<DistrictResponseDto>),
        (status = 404, description = "District not found")
    ),
    tag = "districts"
)]
pub async fn get_district(
    State(service): State<Arc<RegionService>>,
    Path(id_or_code): Path<String>,
) -> Result<Json<ApiResponse<DistrictResponseDto>>> {
    let district = service.get_district(&id_or_code).await?;
    Ok(Json(ApiResponse::success(
        Some(district.into()),
        None,
        None,
    )))
}

fn district_list(districts: Vec<District>) -> ApiResponse<Vec<DistrictResponseDto>> {
    let dtos: Vec<DistrictResponseDto> = districts.into_iter().map(Into::into).collect();
    let meta = Meta::total(dtos.len());
    ApiResponse::success(Some(dtos), None, Some(meta))
}

// ==================== Search & Statistics Handlers ====================

/// Search regions and districts by name
#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Regions first, then districts", body = ApiResponse<Vec<SearchResultDto>>),
        (status = 400, description = "Missing query or limit out of range")
    ),
    tag = "search"
)]
pub async fn search(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<SearchResultDto>>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let results = service.search(&query.q, Some(query.limit)).await?;
    let dtos: Vec<SearchResultDto> = results.into_iter().map(Into::into).collect();
    let meta = Meta::total(dtos.len()).with_query(query.q);
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// Aggregate statistics over regions and districts
#[utoipa::path(
    get,
    path = "/statistics",
    responses(
        (status = 200, description = "Dataset statistics", body = ApiResponse<StatisticsResponseDto>)
    ),
    tag = "statistics"
)]
pub async fn get_statistics(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<StatisticsResponseDto>>> {
    let stats = service.get_statistics().await?;
    Ok(Json(ApiResponse::success(Some(stats.into()), None, None)))
}
