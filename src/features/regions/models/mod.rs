mod coordinates;
mod district;
mod region;
mod search;
mod statistics;

pub use coordinates::Coordinates;
pub use district::{District, DistrictRow};
pub use region::{Region, RegionRow};
pub use search::{SearchKind, SearchMatch, SearchResult};
pub use statistics::Statistics;
