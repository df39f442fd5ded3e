use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus};
use crate::services::notify::Severity;
use crate::state::AppState;

use super::notify;

// GET /api/dashboard/stats
#[derive(Serialize)]
pub struct StatsResponse {
    pub total_bookings: usize,
    pub upcoming_bookings: usize,
    pub completed_mots: usize,
    pub cancelled_bookings: usize,
    pub vehicles_serviced: usize,
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let stats = state.registry.lock().unwrap().stats();
    let vehicles_serviced = state.reports.lock().unwrap().vehicles_serviced();

    Json(StatsResponse {
        total_bookings: stats.total_bookings,
        upcoming_bookings: stats.upcoming_bookings,
        completed_mots: stats.completed_mots,
        cancelled_bookings: stats.cancelled_bookings,
        vehicles_serviced,
    })
}

// GET /api/dashboard/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub q: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct BookingRow {
    pub id: String,
    pub customer_name: String,
    pub registration: String,
    pub vehicle_details: String,
    pub date: String,
    pub status: String,
    pub unread_count: u32,
}

fn booking_row(booking: &Booking) -> BookingRow {
    BookingRow {
        id: booking.id.clone(),
        customer_name: booking.customer_name.clone(),
        registration: booking.registration.clone(),
        vehicle_details: booking.vehicle_details.clone(),
        date: booking.date.format("%Y-%m-%d %H:%M").to_string(),
        status: booking.status.as_str().to_string(),
        unread_count: booking.unread_count,
    }
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<BookingRow>>, AppError> {
    let status = match query.status.as_deref() {
        None | Some("") | Some("all") => None,
        Some(s) => Some(
            BookingStatus::parse(s)
                .ok_or_else(|| AppError::Validation(format!("unknown status: {s}")))?,
        ),
    };

    let registry = state.registry.lock().unwrap();
    let rows = registry
        .filtered(query.q.as_deref(), status)
        .into_iter()
        .map(booking_row)
        .collect();

    Ok(Json(rows))
}

// DELETE /api/dashboard/bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let deleted = state.registry.lock().unwrap().delete(&id);

    if deleted {
        notify(
            &state,
            "Booking deleted",
            &format!("Booking {id} has been removed"),
            Severity::Info,
        )
        .await;
    } else {
        tracing::info!(booking_id = %id, "delete requested for absent booking");
    }

    Json(serde_json::json!({ "deleted": deleted }))
}
