use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{District, DistrictRow, Region, RegionRow, SearchMatch};

/// Read-only access to the `regions` and `districts` tables.
///
/// Each call borrows a pooled connection for the duration of one query; the
/// connection goes back to the pool when the query future completes or fails.
#[derive(Clone)]
pub struct RegionRepository {
    pool: SqlitePool,
}

impl RegionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== Region Queries ====================

    /// All regions ordered by name
    pub async fn all_regions(&self) -> Result<Vec<Region>> {
        let rows = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT id, name, code, capital, population, area_km2, coordinates, created_date
            FROM regions
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_store("listing regions", e))?;

        Ok(rows.into_iter().map(Region::from).collect())
    }

    /// Region whose `id` or `code` equals `key`
    pub async fn region_by_id_or_code(&self, key: &str) -> Result<Option<Region>> {
        let row = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT id, name, code, capital, population, area_km2, coordinates, created_date
            FROM regions
            WHERE id = ?1 OR code = ?1
            LIMIT 1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_store(&format!("fetching region {}", key), e))?;

        Ok(row.map(Region::from))
    }

    pub async fn count_regions(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM regions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_store("counting regions", e))
    }

    // ==================== District Queries ====================

    /// Districts whose `region_id` equals `region_id`, ordered by name
    pub async fn districts_by_region(&self, region_id: &str) -> Result<Vec<District>> {
        let rows = sqlx::query_as::<_, DistrictRow>(
            r#"
            SELECT id, name, region_id, region_name, type, capital, population, area_km2, coordinates
            FROM districts
            WHERE region_id = ?1
            ORDER BY name ASC
            "#,
        )
        .bind(region_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_store(&format!("listing districts of {}", region_id), e))?;

        Ok(rows.into_iter().map(District::from).collect())
    }

    /// Every stored district, orphans included, ordered by region name then name
    pub async fn all_districts(&self) -> Result<Vec<District>> {
        let rows = sqlx::query_as::<_, DistrictRow>(
            r#"
            SELECT id, name, region_id, region_name, type, capital, population, area_km2, coordinates
            FROM districts
            ORDER BY region_name ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_store("listing districts", e))?;

        Ok(rows.into_iter().map(District::from).collect())
    }

    /// District whose id equals `key`.
    ///
    /// Districts carry no separate code column; their id is the code.
    pub async fn district_by_id_or_code(&self, key: &str) -> Result<Option<District>> {
        let row = sqlx::query_as::<_, DistrictRow>(
            r#"
            SELECT id, name, region_id, region_name, type, capital, population, area_km2, coordinates
            FROM districts
            WHERE id = ?1
            LIMIT 1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_store(&format!("fetching district {}", key), e))?;

        Ok(row.map(District::from))
    }

    // ==================== Search ====================

    /// Case-insensitive substring search over region names/codes, then district names.
    ///
    /// Regions fill the result first; districts take whatever room is left of
    /// `limit`. Each group keeps the table's row order.
    pub async fn search_by_name(&self, term: &str, limit: u32) -> Result<Vec<SearchMatch>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let regions = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT id, name, code, capital, population, area_km2, coordinates, created_date
            FROM regions
            WHERE instr(lower(name), lower(?1)) > 0 OR instr(lower(code), lower(?1)) > 0
            LIMIT ?2
            "#,
        )
        .bind(term)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_store("searching regions", e))?;

        let mut matches: Vec<SearchMatch> = regions
            .into_iter()
            .map(|row| SearchMatch::Region(row.into()))
            .collect();

        let remaining = (limit as usize).saturating_sub(matches.len());
        if remaining == 0 {
            return Ok(matches);
        }

        let districts = sqlx::query_as::<_, DistrictRow>(
            r#"
            SELECT id, name, region_id, region_name, type, capital, population, area_km2, coordinates
            FROM districts
            WHERE instr(lower(name), lower(?1)) > 0
            LIMIT ?2
            "#,
        )
        .bind(term)
        .bind(remaining as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_store("searching districts", e))?;

        matches.extend(
            districts
                .into_iter()
                .map(|row| SearchMatch::District(row.into())),
        );

        Ok(matches)
    }
}
