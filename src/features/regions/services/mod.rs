mod region_repository;
mod region_service;

pub use region_repository::RegionRepository;
pub use region_service::RegionService;
