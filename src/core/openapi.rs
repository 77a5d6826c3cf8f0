use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers, models};
use crate::features::system::{dtos as system_dtos, handlers as system_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // System
        system_handlers::api_info,
        system_handlers::health_check,
        // Regions
        regions_handlers::list_regions,
        regions_handlers::get_region,
        regions_handlers::list_districts_by_region,
        // Districts
        regions_handlers::list_districts,
        regions_handlers::get_district,
        // Search & statistics
        regions_handlers::search,
        regions_handlers::get_statistics,
    ),
    components(
        schemas(
            Meta,
            models::Coordinates,
            models::SearchKind,
            system_dtos::ApiInfoDto,
            system_dtos::HealthResponseDto,
            regions_dtos::RegionResponseDto,
            regions_dtos::DistrictResponseDto,
            regions_dtos::SearchResultDto,
            regions_dtos::StatisticsResponseDto,
            ApiResponse<Vec<regions_dtos::RegionResponseDto>>,
            ApiResponse<regions_dtos::RegionResponseDto>,
            ApiResponse<Vec<regions_dtos::DistrictResponseDto>>,
            ApiResponse<regions_dtos::DistrictResponseDto>,
            ApiResponse<Vec<regions_dtos::SearchResultDto>>,
            ApiResponse<regions_dtos::StatisticsResponseDto>,
        )
    ),
    tags(
        (name = "system", description = "Service information and health"),
        (name = "regions", description = "Ghana's administrative regions"),
        (name = "districts", description = "Districts within the regions"),
        (name = "search", description = "Name search across regions and districts"),
        (name = "statistics", description = "Aggregate figures over the dataset"),
    ),
    info(
        title = "GhanaGeo API",
        version = "0.1.0",
        description = "Read-only geographic reference data for Ghana",
    )
)]
pub struct ApiDoc;

/// Overrides the document info with values from configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
