//! Service information and health check endpoints.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
