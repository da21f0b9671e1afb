//! One analysis run: extract → score → summarize → rank.
//!
//! Candidates are processed in upload order. A failure on one document is
//! recorded in `failures` and never aborts the batch.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::documents::DocumentExtractor;
use crate::errors::AnalysisError;
use crate::screening::matcher::score_candidate;
use crate::screening::models::{
    AnalysisReport, AnalysisSettings, Candidate, DocumentFailure, JobDescription,
    SummarizerStatus,
};
use crate::screening::ranker::AnalysisResult;
use crate::screening::summarizer::Summarizer;

pub const NO_SUMMARY: &str = "No summary available";

/// One uploaded resume, read fully into memory.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub jd_text: String,
    pub settings: AnalysisSettings,
    pub documents: Vec<UploadedDocument>,
}

pub async fn run_analysis(
    request: AnalysisRequest,
    extractor: Arc<dyn DocumentExtractor>,
    summarizer: Option<Arc<dyn Summarizer>>,
) -> Result<AnalysisReport, AnalysisError> {
    if request.jd_text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput(
            "job description cannot be empty".to_string(),
        ));
    }
    if request.documents.is_empty() {
        return Err(AnalysisError::EmptyInput(
            "upload at least one resume".to_string(),
        ));
    }

    let run_id = Uuid::new_v4();
    let settings = request.settings;
    let jd = JobDescription::new(&request.jd_text, settings.top_n);
    info!(
        %run_id,
        documents = request.documents.len(),
        keywords = jd.keywords.len(),
        threshold = settings.score_threshold,
        "Starting analysis run"
    );

    let mut candidates = Vec::with_capacity(request.documents.len());
    let mut failures = Vec::new();

    for document in request.documents {
        let name = document.name.clone();
        let raw_text = match extract(extractor.clone(), document).await {
            Ok(text) => text,
            Err(e) => {
                warn!(%run_id, "{e}");
                failures.push(DocumentFailure {
                    name,
                    reason: failure_reason(e),
                });
                continue;
            }
        };

        let mut candidate = score_candidate(&name, &raw_text, &jd);
        debug!(%run_id, candidate = %candidate.name, score = candidate.score, "Scored candidate");

        if let Some(summarizer) = summarizer.as_deref() {
            candidate.summary = narrate(summarizer, &jd, &candidate).await;
        }
        candidates.push(candidate);
    }

    let result = AnalysisResult::new(candidates, settings.score_threshold);
    let shortlisted: Vec<Candidate> = result.shortlisted().cloned().collect();
    let eliminated: Vec<Candidate> = result.eliminated().cloned().collect();
    let chart = result.chart();

    info!(
        %run_id,
        shortlisted = shortlisted.len(),
        eliminated = eliminated.len(),
        failed = failures.len(),
        "Analysis run complete"
    );

    Ok(AnalysisReport {
        run_id,
        generated_at: Utc::now(),
        job_description: jd.text,
        threshold: result.threshold(),
        keywords: jd.keywords,
        shortlisted_count: shortlisted.len(),
        eliminated_count: eliminated.len(),
        shortlisted,
        eliminated,
        chart,
        ranked: result.into_candidates(),
        failures,
        summarizer: if summarizer.is_some() {
            SummarizerStatus::Llm
        } else {
            SummarizerStatus::NotConfigured
        },
    })
}

/// Runs the extractor on a blocking thread; a panic inside the decoder
/// is reported as a parse failure for that document only.
async fn extract(
    extractor: Arc<dyn DocumentExtractor>,
    document: UploadedDocument,
) -> Result<String, AnalysisError> {
    let name = document.name.clone();
    tokio::task::spawn_blocking(move || extractor.extract_text(&document.name, &document.bytes))
        .await
        .unwrap_or_else(|e| {
            Err(AnalysisError::DocumentParse {
                name,
                reason: format!("extractor aborted: {e}"),
            })
        })
}

fn failure_reason(err: AnalysisError) -> String {
    match err {
        AnalysisError::DocumentParse { reason, .. } => reason,
        other => other.to_string(),
    }
}

async fn narrate(summarizer: &dyn Summarizer, jd: &JobDescription, candidate: &Candidate) -> String {
    match summarizer.summarize(&jd.text, &candidate.raw_text).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => NO_SUMMARY.to_string(),
        Err(e) => {
            warn!(candidate = %candidate.name, "{e}");
            e.to_string()
        }
    }
}
