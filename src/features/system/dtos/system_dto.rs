use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::features::system::models::HealthStatus;

/// Service description returned at the root path
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiInfoDto {
    pub message: String,
    pub version: String,
    pub status: String,
    pub docs: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ApiInfoDto {
    pub fn current() -> Self {
        let endpoints = [
            ("regions", "/regions"),
            ("districts", "/districts"),
            ("search", "/search?q=query"),
            ("statistics", "/statistics"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect();

        Self {
            message: "GhanaGeo API - Comprehensive geographic data for Ghana".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "active".to_string(),
            docs: "/swagger-ui/".to_string(),
            endpoints,
        }
    }
}

/// Health probe result
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponseDto {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<HealthStatus> for HealthResponseDto {
    fn from(status: HealthStatus) -> Self {
        match status {
            HealthStatus::Healthy { regions_count } => Self {
                status: "healthy".to_string(),
                database: Some("connected".to_string()),
                regions_count: Some(regions_count),
                error: None,
            },
            HealthStatus::Unhealthy { error } => Self {
                status: "unhealthy".to_string(),
                database: None,
                regions_count: None,
                error: Some(error),
            },
        }
    }
}
