use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::core::database;

/// Single-connection in-memory pool; the database lives as long as the connection.
pub async fn create_memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create in-memory SQLite pool")
}

/// In-memory pool carrying the full published dataset
pub async fn create_seeded_pool() -> SqlitePool {
    let pool = create_memory_pool().await;
    database::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// In-memory pool with the schema in place but no rows
pub async fn create_empty_pool() -> SqlitePool {
    let pool = create_seeded_pool().await;
    sqlx::query("DELETE FROM districts")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("DELETE FROM regions")
        .execute(&pool)
        .await
        .unwrap();
    pool
}

pub async fn insert_region(
    pool: &SqlitePool,
    id: &str,
    name: &str,
    population: i64,
    area_km2: f64,
    coordinates: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO regions (id, name, code, capital, population, area_km2, coordinates)
         VALUES (?1, ?2, ?1, 'Capital', ?3, ?4, ?5)",
    )
    .bind(id)
    .bind(name)
    .bind(population)
    .bind(area_km2)
    .bind(coordinates)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_district(
    pool: &SqlitePool,
    id: &str,
    name: &str,
    region_id: &str,
    coordinates: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO districts (id, name, region_id, region_name, type, capital, population, area_km2, coordinates)
         VALUES (?1, ?2, ?3, ?3, 'District', 'Capital', 1000, 10.0, ?4)",
    )
    .bind(id)
    .bind(name)
    .bind(region_id)
    .bind(coordinates)
    .execute(pool)
    .await
    .unwrap();
}
