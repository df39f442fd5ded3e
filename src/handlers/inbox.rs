use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::response::sse::{Event, Sse};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::{BroadcastStream, IntervalStream};
use tokio_stream::StreamExt;

use crate::errors::AppError;
use crate::models::{Message, MessageEvent};
use crate::services::notify::Severity;
use crate::services::registry::ThreadSummary;
use crate::state::AppState;

use super::notify;

// GET /api/inbox/threads
pub async fn get_threads(State(state): State<Arc<AppState>>) -> Json<Vec<ThreadSummary>> {
    let registry = state.registry.lock().unwrap();
    Json(registry.threads())
}

// GET /api/inbox/thread/:id
#[derive(Serialize)]
pub struct ThreadResponse {
    pub booking_id: String,
    pub customer_name: String,
    pub registration: String,
    pub vehicle_details: String,
    pub messages: Vec<Message>,
}

/// Opening a thread counts as reading it, so the unread counter resets here.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ThreadResponse>, AppError> {
    let mut registry = state.registry.lock().unwrap();
    registry.mark_read(&id);
    let booking = registry
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("no conversation for booking {id}")))?;

    Ok(Json(ThreadResponse {
        booking_id: booking.id.clone(),
        customer_name: booking.customer_name.clone(),
        registration: booking.registration.clone(),
        vehicle_details: booking.vehicle_details.clone(),
        messages: booking.messages.clone(),
    }))
}

// POST /api/inbox/thread/:id/read
pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    state.registry.lock().unwrap().mark_read(&id);
    Json(serde_json::json!({ "ok": true }))
}

// POST /api/inbox/reply
#[derive(Deserialize)]
pub struct ReplyRequest {
    pub booking_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ReplyResponse {
    pub ok: bool,
    pub message: Option<Message>,
}

/// Blank content and unresolved booking ids are dropped without an error;
/// the response just reports that nothing was appended.
pub async fn send_reply(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ReplyRequest>,
) -> Json<ReplyResponse> {
    let appended = {
        let mut registry = state.registry.lock().unwrap();
        registry
            .append_message(&body.booking_id, &body.message, true, Utc::now().naive_utc())
            .cloned()
    };

    let Some(message) = appended else {
        tracing::info!(booking_id = %body.booking_id, "reply ignored");
        return Json(ReplyResponse {
            ok: true,
            message: None,
        });
    };

    // Broadcast to SSE subscribers; ignore if no receivers
    let _ = state.inbox_tx.send(MessageEvent {
        booking_id: body.booking_id.clone(),
        message: message.clone(),
    });

    notify(
        &state,
        "Message sent",
        "Your message has been sent successfully",
        Severity::Success,
    )
    .await;

    Json(ReplyResponse {
        ok: true,
        message: Some(message),
    })
}

// GET /api/inbox/events — SSE stream of appended messages
pub async fn events_stream(
    State(state): State<Arc<AppState>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let rx = state.inbox_tx.subscribe();

    let live_stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data).event("message")))
        }
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(_)) => None,
    });

    let keepalive_stream = tokio_stream::StreamExt::map(
        IntervalStream::new(tokio::time::interval(Duration::from_secs(30))),
        |_| Ok(Event::default().comment("keepalive")),
    );

    Sse::new(StreamExt::merge(live_stream, keepalive_stream))
}
