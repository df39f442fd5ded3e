use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::services::ics::generate_ics;
use crate::state::AppState;

// GET /calendar/:booking_id
pub async fn download_ics(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Response {
    // Strip .ics suffix if present
    let booking_id = raw_id.strip_suffix(".ics").unwrap_or(&raw_id);

    let ics = {
        let registry = state.registry.lock().unwrap();
        match registry.get(booking_id) {
            Some(booking) => generate_ics(booking, &state.config.centre_name),
            None => {
                return (StatusCode::NOT_FOUND, "Booking not found").into_response();
            }
        }
    };

    let filename = format!("booking-{booking_id}.ics");
    let disposition = format!("attachment; filename=\"{filename}\"");

    (
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        ics,
    )
        .into_response()
}
