use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_MODEL;
use crate::screening::models::{AnalysisSettings, DEFAULT_SCORE_THRESHOLD, DEFAULT_TOP_N};

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub top_n: usize,
    pub score_threshold: u8,
    /// Absent means narrative summaries are disabled.
    pub summarizer_api_key: Option<String>,
    pub summarizer_model: String,
    pub summarizer_timeout_secs: u64,
    pub summarizer_max_attempts: u32,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let top_n: usize = env_or("TOP_N_KEYWORDS", DEFAULT_TOP_N)?;
        let score_threshold: i64 = env_or("SCORE_THRESHOLD", DEFAULT_SCORE_THRESHOLD as i64)?;
        let settings = AnalysisSettings::new(top_n, score_threshold)
            .context("Invalid TOP_N_KEYWORDS or SCORE_THRESHOLD")?;

        let max_upload_bytes = upload_limit_bytes(env_or("MAX_UPLOAD_MB", 25)?)?;

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            top_n: settings.top_n,
            score_threshold: settings.score_threshold,
            summarizer_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            summarizer_model: std::env::var("SUMMARIZER_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            summarizer_timeout_secs: env_or("SUMMARIZER_TIMEOUT_SECS", 30)?,
            summarizer_max_attempts: env_or("SUMMARIZER_MAX_ATTEMPTS", 1)?,
            max_upload_bytes,
        })
    }

    /// Default run settings; a request may override them.
    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            top_n: self.top_n,
            score_threshold: self.score_threshold,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            top_n: DEFAULT_TOP_N,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            summarizer_api_key: None,
            summarizer_model: DEFAULT_MODEL.to_string(),
            summarizer_timeout_secs: 5,
            summarizer_max_attempts: 1,
            max_upload_bytes: 1024 * 1024,
        }
    }
}

/// Converts `MAX_UPLOAD_MB` to bytes, rejecting zero and values that overflow.
fn upload_limit_bytes(megabytes: usize) -> Result<usize> {
    if megabytes == 0 {
        bail!("MAX_UPLOAD_MB must be greater than 0");
    }
    megabytes
        .checked_mul(1024 * 1024)
        .with_context(|| format!("MAX_UPLOAD_MB={megabytes} is too large"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or(key, std::env::var(key).ok().as_deref(), default)
}

fn parse_or<T>(key: &str, raw: Option<&str>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{value}'")),
    }
}
