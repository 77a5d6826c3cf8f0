use serde::Serialize;
use sqlx::FromRow;

use super::Coordinates;

/// District model representing subdivisions of a region.
///
/// `region_name` is a copy of the parent's name taken at load time and
/// `district_type` is free text ("Metro", "Municipal", "District", ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct District {
    pub id: String,
    pub name: String,
    pub region_id: String,
    pub region_name: String,
    #[serde(rename = "type")]
    pub district_type: String,
    pub capital: String,
    pub population: i64,
    pub area_km2: f64,
    pub coordinates: Option<Coordinates>,
}

/// Raw `districts` row as stored
#[derive(Debug, FromRow)]
pub struct DistrictRow {
    pub id: String,
    pub name: String,
    pub region_id: String,
    pub region_name: String,
    #[sqlx(rename = "type")]
    pub district_type: String,
    pub capital: String,
    pub population: Option<i64>,
    pub area_km2: Option<f64>,
    pub coordinates: Option<String>,
}

impl From<DistrictRow> for District {
    fn from(row: DistrictRow) -> Self {
        Self {
            coordinates: Coordinates::from_json_text(row.coordinates.as_deref()),
            id: row.id,
            name: row.name,
            region_id: row.region_id,
            region_name: row.region_name,
            district_type: row.district_type,
            capital: row.capital,
            population: row.population.unwrap_or(0),
            area_km2: row.area_km2.unwrap_or(0.0),
        }
    }
}
