pub mod fixture;

use async_trait::async_trait;

use crate::models::VehicleRecord;

/// Source of vehicle attributes keyed by registration plate. Implementations
/// receive the raw customer input and are expected to normalize it
/// (uppercase, whitespace stripped) before matching.
#[async_trait]
pub trait VehicleDirectory: Send + Sync {
    async fn lookup(&self, registration: &str) -> anyhow::Result<Option<VehicleRecord>>;
}
