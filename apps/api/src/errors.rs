use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Domain errors raised while analysing a batch of resumes.
///
/// Only `EmptyInput` and `InvalidSetting` stop a run. The others are recorded
/// against a single candidate or feature and the batch carries on.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Could not parse document '{name}': {reason}")]
    DocumentParse { name: String, reason: String },

    #[error("Summarization unavailable: {0}")]
    SummarizationUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyInput(msg) => AppError::EmptyInput(msg),
            AnalysisError::InvalidSetting(msg) => AppError::Validation(msg),
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::Multipart(err.body_text())
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::EmptyInput(_) => (StatusCode::BAD_REQUEST, "EMPTY_INPUT"),
            AppError::Multipart(_) => (StatusCode::BAD_REQUEST, "MALFORMED_UPLOAD"),
            AppError::Export(_) => (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            AppError::Validation(msg) | AppError::EmptyInput(msg) | AppError::Multipart(msg) => {
                msg.clone()
            }
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                "Could not build the export file".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_maps_to_bad_request() {
        let err: AppError = AnalysisError::EmptyInput("no resumes".to_string()).into();
        assert_eq!(err.status_and_code(), (StatusCode::BAD_REQUEST, "EMPTY_INPUT"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_setting_maps_to_validation() {
        let err: AppError = AnalysisError::InvalidSetting("threshold".to_string()).into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_other_analysis_errors_are_internal() {
        let err: AppError = AnalysisError::Configuration("missing key".to_string()).into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_document_parse_message_names_file() {
        let err = AnalysisError::DocumentParse {
            name: "cv.pdf".to_string(),
            reason: "bad xref".to_string(),
        };
        assert_eq!(err.to_string(), "Could not parse document 'cv.pdf': bad xref");
    }
}
