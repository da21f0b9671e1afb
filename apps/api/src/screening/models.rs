use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AnalysisError;

pub const DEFAULT_TOP_N: usize = 20;
pub const DEFAULT_SCORE_THRESHOLD: u8 = 60;

/// A single term drawn from the job description, ranked by frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub frequency: u32,
    /// frequency / total retained tokens in the JD
    pub weight: f32,
}

/// The job description for one analysis run. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct JobDescription {
    pub text: String,
    #[serde(skip)]
    pub normalized_text: String,
    pub keywords: Vec<KeywordEntry>,
}

/// One uploaded resume and its scoring data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Source file name.
    pub name: String,
    pub score: u8,
    pub matched_keywords: Vec<String>,
    /// Narrative when a summarizer is configured, otherwise the match summary.
    pub summary: String,
    #[serde(default)]
    pub match_summary: String,
    #[serde(skip)]
    pub raw_text: String,
    #[serde(skip)]
    pub normalized_text: String,
}

/// A document that could not be turned into text; excluded from scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub name: String,
    pub reason: String,
}

/// Run-scoped settings. Defaults come from `Config`, requests may override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSettings {
    pub top_n: usize,
    pub score_threshold: u8,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}

impl AnalysisSettings {
    pub fn new(top_n: usize, score_threshold: i64) -> Result<Self, AnalysisError> {
        if top_n == 0 {
            return Err(AnalysisError::InvalidSetting(
                "top_n must be greater than 0".to_string(),
            ));
        }
        if !(0..=100).contains(&score_threshold) {
            return Err(AnalysisError::InvalidSetting(format!(
                "threshold must be between 0 and 100, got {score_threshold}"
            )));
        }
        Ok(Self {
            top_n,
            score_threshold: score_threshold as u8,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Pass,
    Fail,
}

/// Score-vs-threshold entry for chart rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
    pub name: String,
    pub score: u8,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarizerStatus {
    Llm,
    NotConfigured,
}

/// Everything the presentation layer receives for one run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub job_description: String,
    pub threshold: u8,
    pub keywords: Vec<KeywordEntry>,
    pub ranked: Vec<Candidate>,
    pub shortlisted: Vec<Candidate>,
    pub eliminated: Vec<Candidate>,
    pub shortlisted_count: usize,
    pub eliminated_count: usize,
    pub chart: Vec<ChartBar>,
    pub failures: Vec<DocumentFailure>,
    pub summarizer: SummarizerStatus,
}
