use serde::Serialize;
use sqlx::FromRow;

use super::Coordinates;

/// Region model representing Ghana's top-level administrative divisions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub code: String,
    pub capital: String,
    pub population: i64,
    pub area_km2: f64,
    pub coordinates: Option<Coordinates>,
    pub created_date: Option<String>,
}

/// Raw `regions` row as stored
#[derive(Debug, FromRow)]
pub struct RegionRow {
    pub id: String,
    pub name: String,
    pub code: String,
    pub capital: String,
    pub population: Option<i64>,
    pub area_km2: Option<f64>,
    pub coordinates: Option<String>,
    pub created_date: Option<String>,
}

impl From<RegionRow> for Region {
    fn from(row: RegionRow) -> Self {
        Self {
            coordinates: Coordinates::from_json_text(row.coordinates.as_deref()),
            id: row.id,
            name: row.name,
            code: row.code,
            capital: row.capital,
            population: row.population.unwrap_or(0),
            area_km2: row.area_km2.unwrap_or(0.0),
            created_date: row.created_date,
        }
    }
}
