use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::services::wizard::BookingRequest;

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionAck {
    pub reference: String,
}

/// The booking submission endpoint. Opaque to the wizard; callers only
/// observe pending vs resolved.
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    async fn submit(&self, request: &BookingRequest) -> anyhow::Result<SubmissionAck>;
}

/// In-process endpoint: acknowledges after the configured delay with a
/// freshly minted booking reference.
pub struct LocalSubmitter {
    latency: Duration,
}

impl LocalSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl BookingSubmitter for LocalSubmitter {
    async fn submit(&self, request: &BookingRequest) -> anyhow::Result<SubmissionAck> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let reference = new_reference();
        tracing::info!(
            reference = %reference,
            registration = %request.vehicle.registration,
            scheduled_at = %request.scheduled_at,
            "booking submission acknowledged"
        );

        Ok(SubmissionAck { reference })
    }
}

fn new_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("MOT-{}", id[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomerDetails, VehicleRecord};
    use chrono::NaiveDateTime;

    fn request() -> BookingRequest {
        BookingRequest {
            vehicle: VehicleRecord {
                registration: "AB12CDE".to_string(),
                make: "Ford".to_string(),
                model: "Focus".to_string(),
                year: "2018".to_string(),
                fuel_type: "Petrol".to_string(),
            },
            scheduled_at: NaiveDateTime::parse_from_str("2025-06-23 10:00", "%Y-%m-%d %H:%M")
                .unwrap(),
            time_slot: "10:00".to_string(),
            customer: CustomerDetails {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "07000000000".to_string(),
                notes: String::new(),
            },
        }
    }

    #[tokio::test]
    async fn test_ack_carries_reference() {
        let submitter = LocalSubmitter::new(Duration::ZERO);
        let ack = submitter.submit(&request()).await.unwrap();
        assert!(ack.reference.starts_with("MOT-"));
        assert_eq!(ack.reference.len(), 12);
    }

    #[tokio::test]
    async fn test_references_are_unique() {
        let submitter = LocalSubmitter::new(Duration::ZERO);
        let a = submitter.submit(&request()).await.unwrap();
        let b = submitter.submit(&request()).await.unwrap();
        assert_ne!(a.reference, b.reference);
    }
}
