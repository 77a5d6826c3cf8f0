use std::collections::HashSet;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{District, Region, SearchResult, Statistics};
use crate::features::regions::services::RegionRepository;
use crate::features::system::models::HealthStatus;
use crate::shared::constants::SERVICE_SEARCH_LIMIT;

/// Query service over Ghana's regions and districts
pub struct RegionService {
    repository: RegionRepository,
    search_hard_cap: u32,
}

impl RegionService {
    pub fn new(repository: RegionRepository, search_hard_cap: u32) -> Self {
        Self {
            repository,
            search_hard_cap,
        }
    }

    // ==================== Region Methods ====================

    /// List all regions, ordered by name
    pub async fn get_regions(&self) -> Result<Vec<Region>> {
        self.repository.all_regions().await
    }

    /// Get a region by its id or code
    pub async fn get_region(&self, id_or_code: &str) -> Result<Region> {
        self.repository
            .region_by_id_or_code(id_or_code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Region '{}' not found", id_or_code)))
    }

    pub async fn count_regions(&self) -> Result<i64> {
        self.repository.count_regions().await
    }

    /// Probe the store by counting regions
    pub async fn health(&self) -> HealthStatus {
        match self.count_regions().await {
            Ok(regions_count) => HealthStatus::Healthy { regions_count },
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                HealthStatus::Unhealthy {
                    error: e.to_string(),
                }
            }
        }
    }

    // ==================== District Methods ====================

    /// List districts, either of one region or of every region.
    ///
    /// With a key, the region is resolved first (so a code works as well as an
    /// id) and its districts are returned by name. Without one, the result is
    /// the per-region lists concatenated in region order; districts whose
    /// `region_id` matches no region are not part of it.
    pub async fn get_districts(&self, region: Option<&str>) -> Result<Vec<District>> {
        if let Some(key) = region {
            let region = self.get_region(key).await?;
            return self.repository.districts_by_region(&region.id).await;
        }

        let mut districts = Vec::new();
        for region in self.get_regions().await? {
            districts.extend(self.repository.districts_by_region(&region.id).await?);
        }

        Ok(districts)
    }

    /// Get a district by its id
    pub async fn get_district(&self, id_or_code: &str) -> Result<District> {
        self.repository
            .district_by_id_or_code(id_or_code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("District '{}' not found", id_or_code)))
    }

    /// Districts whose `region_id` does not resolve to any region
    pub async fn find_orphan_districts(&self) -> Result<Vec<District>> {
        let region_ids: HashSet<String> = self
            .get_regions()
            .await?
            .into_iter()
            .map(|region| region.id)
            .collect();

        let orphans = self
            .repository
            .all_districts()
            .await?
            .into_iter()
            .filter(|district| !region_ids.contains(&district.region_id))
            .collect();

        Ok(orphans)
    }

    // ==================== Search & Statistics ====================

    /// Search regions, then districts, by name.
    ///
    /// A blank query yields no results; any other query is matched as given,
    /// surrounding whitespace included. `limit` defaults to 50 and is always
    /// held under the configured hard cap.
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let effective_limit = limit
            .unwrap_or(SERVICE_SEARCH_LIMIT)
            .min(self.search_hard_cap);

        tracing::debug!("Searching '{}' with limit {}", query, effective_limit);

        let matches = self.repository.search_by_name(query, effective_limit).await?;
        Ok(matches.into_iter().map(SearchResult::from).collect())
    }

    pub async fn get_statistics(&self) -> Result<Statistics> {
        let regions = self.get_regions().await?;
        let districts = self.get_districts(None).await?;

        Ok(Statistics::compute(&regions, districts.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::models::SearchKind;
    use crate::shared::test_helpers::{
        create_empty_pool, create_seeded_pool, insert_district, insert_region,
    };

    async fn seeded_service() -> RegionService {
        RegionService::new(RegionRepository::new(create_seeded_pool().await), 50)
    }

    #[tokio::test]
    async fn test_get_regions_sorted_with_fixed_count() {
        let service = seeded_service().await;
        let regions = service.get_regions().await.unwrap();

        assert_eq!(regions.len(), 16);
        assert!(regions.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[tokio::test]
    async fn test_get_region_by_id_or_code_is_consistent() {
        let service = seeded_service().await;

        for region in service.get_regions().await.unwrap() {
            let by_id = service.get_region(&region.id).await.unwrap();
            let by_code = service.get_region(&region.code).await.unwrap();
            assert_eq!(by_id.id, by_code.id);
            assert_eq!(by_id, region);
        }
    }

    #[tokio::test]
    async fn test_get_region_not_found() {
        let service = seeded_service().await;
        let err = service.get_region("nonexistent").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_region_known_record() {
        let service = seeded_service().await;
        let region = service.get_region("GR").await.unwrap();

        assert_eq!(region.name, "Greater Accra Region");
        assert_eq!(region.capital, "Accra");
        assert_eq!(region.created_date.as_deref(), Some("1982-07-01"));
        let coords = region.coordinates.unwrap();
        assert_eq!((coords.lat, coords.lng), (5.6037, -0.187));
    }

    #[tokio::test]
    async fn test_health_reports_region_count() {
        let service = seeded_service().await;
        assert_eq!(
            service.health().await,
            HealthStatus::Healthy { regions_count: 16 }
        );
    }

    #[tokio::test]
    async fn test_health_unhealthy_on_closed_store() {
        let pool = create_seeded_pool().await;
        pool.close().await;
        let service = RegionService::new(RegionRepository::new(pool), 50);

        assert!(!service.health().await.is_healthy());
    }

    #[tokio::test]
    async fn test_get_districts_of_region() {
        let service = seeded_service().await;

        let districts = service.get_districts(Some("GR")).await.unwrap();
        assert!(!districts.is_empty());
        assert!(districts.iter().all(|d| d.region_id == "GR"));

        let err = service.get_districts(Some("nonexistent")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_districts_resolves_code_to_id() {
        let pool = create_empty_pool().await;
        sqlx::query(
            "INSERT INTO regions (id, name, code, capital, population, area_km2)
             VALUES ('R-1', 'Test Region', 'TR', 'Town', 10, 1.5)",
        )
        .execute(&pool)
        .await
        .unwrap();
        insert_district(&pool, "D-1", "Only District", "R-1", None).await;
        let service = RegionService::new(RegionRepository::new(pool), 50);

        let districts = service.get_districts(Some("TR")).await.unwrap();
        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].id, "D-1");
    }

    #[tokio::test]
    async fn test_all_districts_is_concatenation_in_region_order() {
        let service = seeded_service().await;

        let mut expected = Vec::new();
        for region in service.get_regions().await.unwrap() {
            expected.extend(service.get_districts(Some(&region.id)).await.unwrap());
        }
        let all = service.get_districts(None).await.unwrap();

        assert_eq!(all, expected);
        assert_eq!(all.len(), 262);
    }

    #[tokio::test]
    async fn test_orphan_districts_are_flagged_not_fixed() {
        let service = seeded_service().await;
        let mut orphans: Vec<(String, String)> = service
            .find_orphan_districts()
            .await
            .unwrap()
            .into_iter()
            .map(|d| (d.id, d.region_id))
            .collect();
        orphans.sort();

        assert_eq!(
            orphans,
            vec![
                ("OTI-08".to_string(), "OT".to_string()),
                ("WNR-01".to_string(), "WNRR".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_search_blank_query_is_empty() {
        let service = seeded_service().await;
        assert!(service.search("", None).await.unwrap().is_empty());
        assert!(service.search("   ", Some(10)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_keeps_surrounding_whitespace() {
        let service = seeded_service().await;
        let results = service.search(" accra", None).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "GR");
        assert_eq!(results[0].kind, SearchKind::Region);
    }

    #[tokio::test]
    async fn test_search_limit_one_returns_region() {
        let service = seeded_service().await;
        let results = service.search("accra", Some(1)).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, SearchKind::Region);
        assert_eq!(results[0].region, None);
    }

    #[tokio::test]
    async fn test_search_district_carries_region_name() {
        let service = seeded_service().await;
        let results = service.search("kumasi", None).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, SearchKind::District);
        assert_eq!(results[0].region.as_deref(), Some("Ashanti Region"));
    }

    #[tokio::test]
    async fn test_search_applies_hard_cap() {
        let service = RegionService::new(RegionRepository::new(create_seeded_pool().await), 3);

        let results = service.search("a", Some(40)).await.unwrap();
        assert_eq!(results.len(), 3);

        let results = service.search("a", None).await.unwrap();
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn test_search_default_limit_is_fifty() {
        let service = RegionService::new(RegionRepository::new(create_seeded_pool().await), 500);
        let results = service.search("a", None).await.unwrap();
        assert_eq!(results.len(), 50);
    }

    #[tokio::test]
    async fn test_statistics_over_dataset() {
        let service = seeded_service().await;
        let stats = service.get_statistics().await.unwrap();

        assert_eq!(stats.total_regions, 16);
        assert_eq!(stats.total_districts, 262);
        assert_eq!(stats.total_population, 30_875_159);
        assert_eq!(stats.total_area_km2, 243_893.4);
        assert_eq!(stats.average_population, 1_929_697);
        assert_eq!(
            stats.most_populous_region.as_deref(),
            Some("Greater Accra Region")
        );
    }

    #[tokio::test]
    async fn test_statistics_without_regions() {
        let service = RegionService::new(RegionRepository::new(create_empty_pool().await), 50);
        let stats = service.get_statistics().await.unwrap();

        assert_eq!(stats.total_regions, 0);
        assert_eq!(stats.average_population, 0);
        assert_eq!(stats.most_populous_region, None);
    }

    #[tokio::test]
    async fn test_statistics_average_matches_region_sum() {
        let pool = create_empty_pool().await;
        insert_region(&pool, "A", "Alpha Region", 100, 1.0, None).await;
        insert_region(&pool, "B", "Beta Region", 201, 2.0, None).await;
        let service = RegionService::new(RegionRepository::new(pool), 50);

        let regions = service.get_regions().await.unwrap();
        let stats = service.get_statistics().await.unwrap();
        let sum: i64 = regions.iter().map(|r| r.population).sum();

        assert_eq!(
            stats.average_population,
            (sum as f64 / regions.len() as f64).round_ties_even() as i64
        );
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let service = seeded_service().await;

        assert_eq!(
            service.get_regions().await.unwrap(),
            service.get_regions().await.unwrap()
        );
        assert_eq!(
            service.get_districts(Some("AS")).await.unwrap(),
            service.get_districts(Some("AS")).await.unwrap()
        );
        assert_eq!(
            service.search("west", Some(20)).await.unwrap(),
            service.search("west", Some(20)).await.unwrap()
        );
        assert_eq!(
            service.get_statistics().await.unwrap(),
            service.get_statistics().await.unwrap()
        );
    }
}
