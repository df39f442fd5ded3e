use std::time::Duration;

use async_trait::async_trait;

use crate::models::{normalize_registration, VehicleRecord};

use super::VehicleDirectory;

/// In-process stand-in for the national vehicle registry. Responds after a
/// configured delay, the explicit form of the latency a real lookup would
/// have.
pub struct FixtureDirectory {
    latency: Duration,
    vehicles: Vec<VehicleRecord>,
}

impl FixtureDirectory {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            vehicles: sample_vehicles(),
        }
    }
}

fn record(registration: &str, make: &str, model: &str, year: &str, fuel_type: &str) -> VehicleRecord {
    VehicleRecord {
        registration: registration.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        year: year.to_string(),
        fuel_type: fuel_type.to_string(),
    }
}

pub fn sample_vehicles() -> Vec<VehicleRecord> {
    vec![
        record("AB12CDE", "Ford", "Focus", "2018", "Petrol"),
        record("XY58ABC", "Volkswagen", "Golf", "2020", "Diesel"),
        record("LK70MNO", "Toyota", "Prius", "2021", "Hybrid"),
    ]
}

#[async_trait]
impl VehicleDirectory for FixtureDirectory {
    async fn lookup(&self, registration: &str) -> anyhow::Result<Option<VehicleRecord>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let key = normalize_registration(registration);
        Ok(self
            .vehicles
            .iter()
            .find(|v| v.registration == key)
            .cloned())
    }
}
