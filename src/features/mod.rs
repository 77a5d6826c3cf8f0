pub mod regions;
pub mod system;
