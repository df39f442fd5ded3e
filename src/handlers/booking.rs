use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, CustomerDetails, VehicleRecord};
use crate::services::calendar;
use crate::services::notify::Severity;
use crate::services::wizard::{BookingWizard, WizardStep};
use crate::state::AppState;

use super::notify;

const LOOKUP_HINT: &str =
    "Vehicle not found. Try one of our sample registrations: AB12CDE, XY58ABC or LK70MNO";

fn session_not_found() -> AppError {
    AppError::NotFound("booking session not found".to_string())
}

#[derive(Serialize)]
pub struct WizardSnapshot {
    step: u8,
    vehicle: Option<VehicleRecord>,
    date: Option<NaiveDate>,
    time_slot: Option<String>,
    customer: CustomerDetails,
    submitting: bool,
}

impl WizardSnapshot {
    fn of(wizard: &BookingWizard) -> Self {
        Self {
            step: wizard.step().number(),
            vehicle: wizard.vehicle().cloned(),
            date: wizard.date(),
            time_slot: wizard.time_slot().map(str::to_string),
            customer: wizard.customer().clone(),
            submitting: wizard.is_submitting(),
        }
    }
}

#[derive(Serialize)]
pub struct SessionResponse {
    session_id: String,
    wizard: WizardSnapshot,
}

// POST /api/booking/session
pub async fn create_session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    let session_id = Uuid::new_v4().to_string();
    let wizard = BookingWizard::new();
    let snapshot = WizardSnapshot::of(&wizard);

    state
        .wizards
        .lock()
        .unwrap()
        .insert(session_id.clone(), wizard);

    tracing::info!(session = %session_id, "booking session started");

    Json(SessionResponse {
        session_id,
        wizard: snapshot,
    })
}

// GET /api/booking/session/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WizardSnapshot>, AppError> {
    let wizards = state.wizards.lock().unwrap();
    let wizard = wizards.get(&id).ok_or_else(session_not_found)?;
    Ok(Json(WizardSnapshot::of(wizard)))
}

// POST /api/booking/session/:id/vehicle
#[derive(Deserialize)]
pub struct LookupRequest {
    pub registration: String,
}

pub async fn lookup_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<LookupRequest>,
) -> Result<Json<WizardSnapshot>, AppError> {
    let registration = body.registration.trim().to_string();
    if registration.is_empty() {
        return Err(AppError::Validation(
            "please enter a vehicle registration number".to_string(),
        ));
    }

    if !state.wizards.lock().unwrap().contains_key(&id) {
        return Err(session_not_found());
    }

    let found = state.directory.lookup(&registration).await.map_err(|e| {
        tracing::error!(error = %e, "vehicle directory lookup failed");
        AppError::Directory(e.to_string())
    })?;

    let Some(vehicle) = found else {
        tracing::info!(registration = %registration, "registration not found");
        return Err(AppError::NotFound(LOOKUP_HINT.to_string()));
    };

    // The session may have been discarded while the lookup was pending; in
    // that case the result is dropped instead of applied to stale state.
    let snapshot = {
        let mut wizards = state.wizards.lock().unwrap();
        let wizard = wizards.get_mut(&id).ok_or_else(session_not_found)?;
        wizard.select_vehicle(vehicle.clone());
        WizardSnapshot::of(wizard)
    };

    notify(
        &state,
        "Vehicle found",
        &format!("{} {} ({})", vehicle.make, vehicle.model, vehicle.year),
        Severity::Success,
    )
    .await;

    Ok(Json(snapshot))
}

// POST /api/booking/session/:id/date
#[derive(Deserialize)]
pub struct DateRequest {
    pub date: NaiveDate,
}

pub async fn select_date(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<DateRequest>,
) -> Result<Json<WizardSnapshot>, AppError> {
    let today = Utc::now().date_naive();
    let mut wizards = state.wizards.lock().unwrap();
    let wizard = wizards.get_mut(&id).ok_or_else(session_not_found)?;
    wizard.select_date(body.date, today)?;
    Ok(Json(WizardSnapshot::of(wizard)))
}

// POST /api/booking/session/:id/slot
#[derive(Deserialize)]
pub struct SlotRequest {
    pub date: NaiveDate,
    pub time: String,
}

pub async fn select_slot(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<SlotRequest>,
) -> Result<Json<WizardSnapshot>, AppError> {
    let today = Utc::now().date_naive();
    let mut wizards = state.wizards.lock().unwrap();
    let wizard = wizards.get_mut(&id).ok_or_else(session_not_found)?;
    wizard.select_slot(body.date, &body.time, today)?;
    Ok(Json(WizardSnapshot::of(wizard)))
}

// POST /api/booking/session/:id/step
#[derive(Deserialize)]
pub struct StepRequest {
    pub step: u8,
}

pub async fn jump_to_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<StepRequest>,
) -> Result<Json<WizardSnapshot>, AppError> {
    let target = WizardStep::from_number(body.step)
        .ok_or_else(|| AppError::Validation(format!("unknown step: {}", body.step)))?;

    let mut wizards = state.wizards.lock().unwrap();
    let wizard = wizards.get_mut(&id).ok_or_else(session_not_found)?;
    // Jumping ahead of the collected data is a no-op; the snapshot reports
    // whichever step the wizard actually sits on.
    wizard.jump_to_step(target);
    Ok(Json(WizardSnapshot::of(wizard)))
}

// POST /api/booking/session/:id/details
#[derive(Deserialize)]
pub struct DetailsRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

pub async fn update_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<DetailsRequest>,
) -> Result<Json<WizardSnapshot>, AppError> {
    let mut wizards = state.wizards.lock().unwrap();
    let wizard = wizards.get_mut(&id).ok_or_else(session_not_found)?;
    wizard.update_customer(CustomerDetails {
        name: body.name,
        email: body.email,
        phone: body.phone,
        notes: body.notes,
    });
    Ok(Json(WizardSnapshot::of(wizard)))
}

// POST /api/booking/session/:id/submit
#[derive(Serialize)]
pub struct SubmitResponse {
    pub reference: String,
    pub booking: Booking,
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SubmitResponse>, AppError> {
    let request = {
        let mut wizards = state.wizards.lock().unwrap();
        let wizard = wizards.get_mut(&id).ok_or_else(session_not_found)?;
        wizard.begin_submit()?
    };

    let ack = match state.submitter.submit(&request).await {
        Ok(ack) => ack,
        Err(e) => {
            tracing::error!(error = %e, session = %id, "booking submission failed");
            if let Some(wizard) = state.wizards.lock().unwrap().get_mut(&id) {
                wizard.finish_submit();
            }
            return Err(AppError::Submission(e.to_string()));
        }
    };

    // Discard the ack if the session was closed while the submission was
    // pending; a completed session is removed either way.
    {
        let mut wizards = state.wizards.lock().unwrap();
        if wizards.remove(&id).is_none() {
            tracing::warn!(session = %id, "session closed mid-submission, discarding result");
            return Err(session_not_found());
        }
    }

    let booking = Booking {
        id: ack.reference.clone(),
        customer_name: request.customer.name.clone(),
        registration: request.vehicle.registration.clone(),
        vehicle_details: request.vehicle.details(),
        date: request.scheduled_at,
        status: BookingStatus::Confirmed,
        messages: vec![],
        unread_count: 0,
    };
    state.registry.lock().unwrap().insert(booking.clone());

    notify(
        &state,
        "Booking successful!",
        &format!(
            "MOT booked for {} {} on {} at {}",
            request.vehicle.make,
            request.vehicle.model,
            request.scheduled_at.format("%Y-%m-%d"),
            request.time_slot,
        ),
        Severity::Success,
    )
    .await;

    Ok(Json(SubmitResponse {
        reference: ack.reference,
        booking,
    }))
}

// GET /api/booking/slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: NaiveDate,
    pub slots: &'static [&'static str],
}

pub async fn day_slots(Query(query): Query<SlotsQuery>) -> Result<Json<SlotsResponse>, AppError> {
    let today = Utc::now().date_naive();
    if !calendar::is_date_selectable(query.date, today) {
        return Err(AppError::Validation(
            "that date is not available for booking".to_string(),
        ));
    }
    Ok(Json(SlotsResponse {
        date: query.date,
        slots: calendar::day_slots(),
    }))
}

// POST /api/my-bookings
#[derive(Deserialize)]
pub struct FindBookingsRequest {
    pub email: String,
    pub reference: String,
}

#[derive(Serialize)]
pub struct CustomerBooking {
    pub reference: String,
    pub registration: String,
    pub vehicle_details: String,
    pub date: String,
    pub status: String,
}

pub async fn find_bookings(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FindBookingsRequest>,
) -> Result<Json<Vec<CustomerBooking>>, AppError> {
    if body.email.trim().is_empty() || body.reference.trim().is_empty() {
        return Err(AppError::Validation(
            "please enter both your email and booking reference".to_string(),
        ));
    }

    let registry = state.registry.lock().unwrap();
    let found = registry
        .find_by_reference(&body.reference)
        .into_iter()
        .map(|b| CustomerBooking {
            reference: b.id.clone(),
            registration: b.registration.clone(),
            vehicle_details: b.vehicle_details.clone(),
            date: b.date.format("%Y-%m-%d %H:%M").to_string(),
            status: b.status.as_str().to_string(),
        })
        .collect();

    Ok(Json(found))
}
