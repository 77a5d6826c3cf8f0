use serde::Serialize;
use utoipa::ToSchema;

use super::{Coordinates, District, Region};

/// A record matched by the storage-level name search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchMatch {
    Region(Region),
    District(District),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Region,
    District,
}

/// Projection returned to search callers; never persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SearchKind,
    /// Parent region name, set for districts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl From<SearchMatch> for SearchResult {
    fn from(found: SearchMatch) -> Self {
        match found {
            SearchMatch::Region(region) => Self {
                id: region.id,
                name: region.name,
                kind: SearchKind::Region,
                region: None,
                coordinates: region.coordinates,
            },
            SearchMatch::District(district) => Self {
                id: district.id,
                name: district.name,
                kind: SearchKind::District,
                region: Some(district.region_name),
                coordinates: district.coordinates,
            },
        }
    }
}
