/// Outcome of probing the data store
#[derive(Debug, Clone, PartialEq)]
pub enum HealthStatus {
    Healthy { regions_count: i64 },
    Unhealthy { error: String },
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy { .. })
    }
}
