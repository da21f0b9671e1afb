//! Keyword Extractor — derives the top-N terms of a job description by term frequency.
//!
//! A single document has a constant inverse document frequency, so raw term
//! frequency alone decides the ranking. Ties are broken by lexical order so the
//! result never depends on hash iteration order.

use std::collections::HashMap;

use crate::screening::models::{JobDescription, KeywordEntry};
use crate::screening::normalizer::{clean_text, tokenize};

/// Returns at most `top_n` keywords, highest frequency first, then lexical.
/// Yields fewer than `top_n` when the JD has fewer distinct non-stopword terms.
pub fn extract_keywords(jd_text: &str, top_n: usize) -> Vec<KeywordEntry> {
    let tokens = tokenize(jd_text);
    if tokens.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let total = tokens.len() as f32;
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);

    ranked
        .into_iter()
        .map(|(keyword, frequency)| KeywordEntry {
            keyword,
            frequency,
            weight: frequency as f32 / total,
        })
        .collect()
}

impl JobDescription {
    pub fn new(text: &str, top_n: usize) -> Self {
        Self {
            text: text.to_string(),
            normalized_text: clean_text(text),
            keywords: extract_keywords(text, top_n),
        }
    }

    pub fn keyword_terms(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.keyword.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = r#"
        Senior Backend Engineer
        We need Python, SQL and AWS. Python services run on Docker and Kubernetes.
        Required: Python (5+ years), SQL tuning, AWS Lambda.
    "#;

    fn terms(entries: &[KeywordEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.keyword.as_str()).collect()
    }

    #[test]
    fn test_frequency_orders_keywords() {
        let keywords = extract_keywords(JD, 3);
        assert_eq!(terms(&keywords), vec!["python", "aws", "sql"]);
        assert_eq!(keywords[0].frequency, 3);
        assert_eq!(keywords[1].frequency, 2);
    }

    #[test]
    fn test_ties_broken_lexically() {
        let keywords = extract_keywords("zeta alpha mike alpha zeta mike", 10);
        assert_eq!(terms(&keywords), vec!["alpha", "mike", "zeta"]);
    }

    #[test]
    fn test_size_is_min_of_top_n_and_distinct_terms() {
        let all = extract_keywords(JD, 100);
        for n in [1, 2, 5, 10, 100] {
            let keywords = extract_keywords(JD, n);
            assert_eq!(keywords.len(), n.min(all.len()));
        }
    }

    #[test]
    fn test_stopwords_and_short_tokens_excluded() {
        let keywords = extract_keywords("the and a C R Go rust", 20);
        assert_eq!(terms(&keywords), vec!["rust"]);
    }

    #[test]
    fn test_empty_jd_yields_no_keywords() {
        assert!(extract_keywords("", 20).is_empty());
        assert!(extract_keywords("the and of 123 !!!", 20).is_empty());
    }

    #[test]
    fn test_weights_are_relative_frequency() {
        let keywords = extract_keywords("rust rust kafka", 5);
        assert!((keywords[0].weight - 2.0 / 3.0).abs() < f32::EPSILON);
        assert!((keywords[1].weight - 1.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let first = extract_keywords(JD, 5);
        for _ in 0..10 {
            assert_eq!(extract_keywords(JD, 5), first);
        }
    }

    #[test]
    fn test_job_description_new() {
        let jd = JobDescription::new("Rust, Kafka!", 20);
        assert_eq!(jd.normalized_text, "rust kafka");
        assert_eq!(jd.keyword_terms().collect::<Vec<_>>(), vec!["kafka", "rust"]);
    }
}
