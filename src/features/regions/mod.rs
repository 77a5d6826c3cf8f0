//! Ghana administrative regions feature.
//!
//! Read-only access to the 16 regions of Ghana and their districts, with a
//! name search across both and aggregate statistics.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/regions` | List all regions |
//! | GET | `/regions/{id_or_code}` | Get region by id or code |
//! | GET | `/regions/{id_or_code}/districts` | List districts in a region |
//! | GET | `/districts?region=` | List districts, optionally of one region |
//! | GET | `/districts/{id_or_code}` | Get district by id |
//! | GET | `/search?q=&limit=` | Search regions, then districts, by name |
//! | GET | `/statistics` | Totals, averages and most populous region |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{RegionRepository, RegionService};
