use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub customer_name: String,
    pub registration: String,
    pub vehicle_details: String,
    pub report_type: ReportType,
    pub date: NaiveDateTime,
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Mot,
    Diagnostic,
    Service,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Mot => "mot",
            ReportType::Diagnostic => "diagnostic",
            ReportType::Service => "service",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mot" => Some(ReportType::Mot),
            "diagnostic" => Some(ReportType::Diagnostic),
            "service" => Some(ReportType::Service),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Completed,
    Pending,
    InProgress,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "completed",
            ReportStatus::Pending => "pending",
            ReportStatus::InProgress => "in_progress",
        }
    }
}
