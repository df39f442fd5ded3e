use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Report, ReportType};
use crate::services::notify::Severity;
use crate::state::AppState;

use super::notify;

// GET /api/dashboard/reports
#[derive(Deserialize)]
pub struct ReportsQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub report_type: Option<String>,
}

#[derive(Serialize)]
pub struct ReportRow {
    pub id: String,
    pub customer_name: String,
    pub registration: String,
    pub vehicle_details: String,
    pub report_type: String,
    pub date: String,
    pub status: String,
}

fn report_row(report: &Report) -> ReportRow {
    ReportRow {
        id: report.id.clone(),
        customer_name: report.customer_name.clone(),
        registration: report.registration.clone(),
        vehicle_details: report.vehicle_details.clone(),
        report_type: report.report_type.as_str().to_string(),
        date: report.date.format("%Y-%m-%d %H:%M").to_string(),
        status: report.status.as_str().to_string(),
    }
}

pub async fn get_reports(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportsQuery>,
) -> Result<Json<Vec<ReportRow>>, AppError> {
    let report_type = match query.report_type.as_deref() {
        None | Some("") | Some("all") => None,
        Some(s) => Some(
            ReportType::parse(s)
                .ok_or_else(|| AppError::Validation(format!("unknown report type: {s}")))?,
        ),
    };

    let reports = state.reports.lock().unwrap();
    let rows = reports
        .filtered(query.q.as_deref(), report_type)
        .into_iter()
        .map(report_row)
        .collect();

    Ok(Json(rows))
}

// DELETE /api/dashboard/reports/:id
pub async fn delete_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let deleted = state.reports.lock().unwrap().delete(&id);

    if deleted {
        notify(
            &state,
            "Report deleted",
            &format!("Report {id} has been removed"),
            Severity::Info,
        )
        .await;
    }

    Json(serde_json::json!({ "deleted": deleted }))
}
