//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::screening::export::{candidates_to_csv, EXPORT_FILE_NAME};
use crate::screening::models::{AnalysisReport, AnalysisSettings, Candidate};
use crate::screening::pipeline::{run_analysis, AnalysisRequest, UploadedDocument};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub candidates: Vec<Candidate>,
}

/// POST /api/v1/analysis
///
/// Multipart fields: `jd_text` (required), `threshold`, `top_n`, and any number
/// of file parts. Every part that carries a filename is treated as a resume,
/// except the empty `filename=""` part browsers send when no file was chosen.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let defaults = state.config.analysis_settings();
    let mut jd_text = String::new();
    let mut threshold = i64::from(defaults.score_threshold);
    let mut top_n = defaults.top_n;
    let mut documents = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if let Some(file_name) = field.file_name().map(String::from) {
            let bytes = field.bytes().await?;
            if is_unselected_file(&file_name, &bytes) {
                tracing::debug!("Skipping empty file part");
                continue;
            }
            documents.push(UploadedDocument {
                name: file_name,
                bytes,
            });
            continue;
        }

        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await?;
        match name.as_str() {
            "jd_text" => jd_text = value,
            "threshold" => threshold = parse_number("threshold", &value)?,
            "top_n" => top_n = parse_number("top_n", &value)?,
            other => tracing::debug!("Ignoring unknown form field '{other}'"),
        }
    }

    let settings = AnalysisSettings::new(top_n, threshold)?;
    let report = run_analysis(
        AnalysisRequest {
            jd_text,
            settings,
            documents,
        },
        state.extractor.clone(),
        state.summarizer.clone(),
    )
    .await?;

    Ok(Json(report))
}

/// POST /api/v1/analysis/export
///
/// Renders the posted candidates (normally a report's `shortlisted`) as CSV, order unchanged.
pub async fn handle_export(
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let body = candidates_to_csv(&request.candidates)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        body,
    ))
}

fn is_unselected_file(file_name: &str, bytes: &[u8]) -> bool {
    file_name.trim().is_empty() && bytes.is_empty()
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{field} must be a whole number, got '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<i64>("threshold", " 70 ").unwrap(), 70);
        assert!(parse_number::<usize>("top_n", "-3").is_err());
        assert!(parse_number::<i64>("threshold", "high").is_err());
    }

    #[test]
    fn test_unselected_file_part_is_skipped() {
        assert!(is_unselected_file("", b""));
        assert!(is_unselected_file("  ", b""));
        assert!(!is_unselected_file("", b"%PDF-1.4"));
        assert!(!is_unselected_file("cv.pdf", b""));
    }
}
