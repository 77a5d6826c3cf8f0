use serde::Serialize;

use super::Region;

/// Aggregate figures over the whole dataset.
///
/// Population and area are summed over regions only; a region's population
/// already includes its districts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_regions: usize,
    pub total_districts: usize,
    pub total_population: i64,
    pub total_area_km2: f64,
    pub average_population: i64,
    pub most_populous_region: Option<String>,
}

impl Statistics {
    /// `regions` must be in listing order: ties for most populous go to the first one.
    pub fn compute(regions: &[Region], total_districts: usize) -> Self {
        let total_population: i64 = regions.iter().map(|r| r.population).sum();
        let total_area: f64 = regions.iter().map(|r| r.area_km2).sum();

        let average_population = if regions.is_empty() {
            0
        } else {
            (total_population as f64 / regions.len() as f64).round_ties_even() as i64
        };

        let most_populous_region = regions
            .iter()
            .fold(None::<&Region>, |best, region| match best {
                Some(current) if current.population >= region.population => Some(current),
                _ => Some(region),
            })
            .map(|region| region.name.clone());

        Self {
            total_regions: regions.len(),
            total_districts,
            total_population,
            total_area_km2: round_to_cents(total_area),
            average_population,
            most_populous_region,
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
