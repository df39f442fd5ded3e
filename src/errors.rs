use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::wizard::WizardError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("a submission is already in progress")]
    SubmissionInFlight,

    #[error("directory error: {0}")]
    Directory(String),

    #[error("submission error: {0}")]
    Submission(String),
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::SubmissionInFlight => AppError::SubmissionInFlight,
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SubmissionInFlight => StatusCode::CONFLICT,
            AppError::Directory(_) => StatusCode::BAD_GATEWAY,
            AppError::Submission(_) => StatusCode::BAD_GATEWAY,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_errors_map_to_validation() {
        let err: AppError = WizardError::MissingSelection.into();
        assert!(matches!(err, AppError::Validation(_)));

        let err: AppError = WizardError::SubmissionInFlight.into();
        assert!(matches!(err, AppError::SubmissionInFlight));
    }
}
