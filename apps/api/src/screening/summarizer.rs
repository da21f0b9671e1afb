//! Narrative summaries — pluggable capability behind a trait.
//!
//! The numeric score never depends on a summarizer. `AppState` holds an
//! `Option<Arc<dyn Summarizer>>`; `None` means narratives are not configured.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::AnalysisError;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, PLAIN_TEXT_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError, LlmSettings};
use crate::screening::prompts::{MAX_RESUME_CHARS, SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM};

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, jd_text: &str, resume_text: &str) -> Result<String, AnalysisError>;
}

/// Summarizer backed by the hosted inference API.
pub struct LlmSummarizer(pub LlmClient);

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(&self, jd_text: &str, resume_text: &str) -> Result<String, AnalysisError> {
        let prompt = build_prompt(jd_text, resume_text);
        let system = format!("{SUMMARY_SYSTEM} {PLAIN_TEXT_INSTRUCTION}");
        self.0
            .call_text(&prompt, &system)
            .await
            .map_err(|e| AnalysisError::SummarizationUnavailable(describe(&e)))
    }
}

fn describe(err: &LlmError) -> String {
    match err {
        LlmError::Api { status, message } => format!("status {status}: {message}"),
        other => other.to_string(),
    }
}

fn build_prompt(jd_text: &str, resume_text: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{jd_text}", jd_text.trim())
        .replace("{resume_text}", truncate_chars(resume_text.trim(), MAX_RESUME_CHARS))
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Builds the LLM summarizer. A missing credential is a `Configuration` error,
/// which callers treat as "narratives not configured".
pub fn build_summarizer(config: &Config) -> Result<Arc<dyn Summarizer>, AnalysisError> {
    let api_key = config
        .summarizer_api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            AnalysisError::Configuration("ANTHROPIC_API_KEY is not set".to_string())
        })?;

    let client = LlmClient::new(LlmSettings {
        api_key,
        model: config.summarizer_model.clone(),
        timeout: Duration::from_secs(config.summarizer_timeout_secs),
        max_attempts: config.summarizer_max_attempts,
    })
    .map_err(|e| AnalysisError::Configuration(format!("could not build HTTP client: {e}")))?;

    Ok(Arc::new(LlmSummarizer(client)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_both_documents() {
        let prompt = build_prompt("  Rust engineer  ", "Built Kafka pipelines");
        assert!(prompt.contains("JOB DESCRIPTION:\nRust engineer\n"));
        assert!(prompt.ends_with("Built Kafka pipelines"));
        assert!(!prompt.contains("{grounding_instruction}"));
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_missing_credential_is_configuration_error() {
        let mut config = Config::for_tests();
        config.summarizer_api_key = None;
        assert!(matches!(
            build_summarizer(&config),
            Err(AnalysisError::Configuration(_))
        ));

        config.summarizer_api_key = Some("   ".to_string());
        assert!(build_summarizer(&config).is_err());
    }

    #[test]
    fn test_credential_present_builds_summarizer() {
        let mut config = Config::for_tests();
        config.summarizer_api_key = Some("sk-test".to_string());
        assert!(build_summarizer(&config).is_ok());
    }

    #[test]
    fn test_describe_api_error() {
        let err = LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(describe(&err), "status 503: overloaded");
    }
}
