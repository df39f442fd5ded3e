use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single entry in a booking's conversation thread. Immutable once created;
/// the registry appends in sequence order, never in between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub timestamp: NaiveDateTime,
    pub is_staff: bool,
}

/// Broadcast to inbox SSE subscribers whenever a message lands on a thread.
#[derive(Debug, Clone, Serialize)]
pub struct MessageEvent {
    pub booking_id: String,
    pub message: Message,
}
