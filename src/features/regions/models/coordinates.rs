use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Latitude/longitude pair stored as `{"lat": .., "lng": ..}` JSON text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Decode the serialized column value.
    ///
    /// A missing or malformed value yields `None` so a bad coordinate never
    /// fails the record that carries it.
    pub fn from_json_text(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }

        match serde_json::from_str::<Coordinates>(raw) {
            Ok(coords) => Some(coords),
            Err(e) => {
                tracing::warn!("Ignoring malformed coordinates {:?}: {}", raw, e);
                None
            }
        }
    }
}
