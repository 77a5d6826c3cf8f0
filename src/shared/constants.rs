/// Default number of search results returned when the caller gives no limit
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Ceiling the query service applies on its own, independent of transport validation
pub const DEFAULT_SEARCH_HARD_CAP: u32 = 50;

/// Limit used by in-process callers that do not pass one
pub const SERVICE_SEARCH_LIMIT: u32 = 50;
