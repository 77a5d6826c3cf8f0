use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::regions::models::{
    Coordinates, District, Region, SearchKind, SearchResult, Statistics,
};
use crate::shared::constants::DEFAULT_SEARCH_LIMIT;

/// Query parameters for listing districts
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DistrictListQuery {
    /// Restrict to one region, by id or code
    #[param(example = "GR")]
    pub region: Option<String>,
}

/// Query parameters for searching regions and districts
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct SearchQuery {
    /// Search term (case-insensitive, partial match)
    #[validate(length(min = 1, message = "Search query must not be empty"))]
    #[param(example = "accra", min_length = 1)]
    pub q: String,

    /// Maximum results to return (default: 10, max: 50)
    #[serde(default = "default_search_limit")]
    #[validate(range(min = 1, max = 50, message = "limit must be between 1 and 50"))]
    #[param(minimum = 1, maximum = 50)]
    pub limit: u32,
}

fn default_search_limit() -> u32 {
    DEFAULT_SEARCH_LIMIT
}

/// Response DTO for region data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegionResponseDto {
    pub id: String,
    pub name: String,
    pub code: String,
    pub capital: String,
    pub population: i64,
    pub area_km2: f64,
    pub coordinates: Option<Coordinates>,
    pub created_date: Option<String>,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            name: region.name,
            code: region.code,
            capital: region.capital,
            population: region.population,
            area_km2: region.area_km2,
            coordinates: region.coordinates,
            created_date: region.created_date,
        }
    }
}

/// Response DTO for district data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistrictResponseDto {
    pub id: String,
    pub name: String,
    pub region_id: String,
    pub region_name: String,
    /// Administrative classification as published (e.g. Metro, Municipal, District)
    #[serde(rename = "type")]
    pub district_type: String,
    pub capital: String,
    pub population: i64,
    pub area_km2: f64,
    pub coordinates: Option<Coordinates>,
}

impl From<District> for DistrictResponseDto {
    fn from(district: District) -> Self {
        Self {
            id: district.id,
            name: district.name,
            region_id: district.region_id,
            region_name: district.region_name,
            district_type: district.district_type,
            capital: district.capital,
            population: district.population,
            area_km2: district.area_km2,
            coordinates: district.coordinates,
        }
    }
}

/// Response DTO for a search hit
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResultDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SearchKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl From<SearchResult> for SearchResultDto {
    fn from(result: SearchResult) -> Self {
        Self {
            id: result.id,
            name: result.name,
            kind: result.kind,
            region: result.region,
            coordinates: result.coordinates,
        }
    }
}

/// Response DTO for dataset statistics
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatisticsResponseDto {
    pub total_regions: usize,
    pub total_districts: usize,
    pub total_population: i64,
    pub total_area_km2: f64,
    pub average_population: i64,
    pub most_populous_region: Option<String>,
}

impl From<Statistics> for StatisticsResponseDto {
    fn from(stats: Statistics) -> Self {
        Self {
            total_regions: stats.total_regions,
            total_districts: stats.total_districts,
            total_population: stats.total_population,
            total_area_km2: stats.total_area_km2,
            average_population: stats.average_population,
            most_populous_region: stats.most_populous_region,
        }
    }
}
