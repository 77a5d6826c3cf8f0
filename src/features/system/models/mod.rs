mod health;

pub use health::HealthStatus;
