//! Matcher/Scorer — intersects JD keywords with a resume's token set.
//!
//! Matching is exact token membership: `java` does not match `javascript`.

use std::collections::BTreeSet;

use crate::screening::models::{Candidate, JobDescription};
use crate::screening::normalizer::{clean_text, token_set};

/// Keywords present in `resume_tokens`, in keyword rank order.
pub fn match_keywords<'a>(
    keywords: impl IntoIterator<Item = &'a str>,
    resume_tokens: &BTreeSet<String>,
) -> Vec<String> {
    keywords
        .into_iter()
        .filter(|k| resume_tokens.contains(*k))
        .map(String::from)
        .collect()
}

/// `round(100 * matched / total)`, or 0 when there are no keywords.
pub fn compute_score(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (matched.min(total) as f64 / total as f64) * 100.0;
    pct.round() as u8
}

pub fn match_summary(matched: usize, total: usize) -> String {
    format!("Matched {matched}/{total} keywords")
}

/// Scores one resume against the JD. `summary` starts as the match summary;
/// the pipeline may replace it with a narrative.
pub fn score_candidate(name: &str, raw_text: &str, jd: &JobDescription) -> Candidate {
    let normalized_text = clean_text(raw_text);
    let tokens = token_set(&normalized_text);
    let matched_keywords = match_keywords(jd.keyword_terms(), &tokens);

    let total = jd.keywords.len();
    let score = compute_score(matched_keywords.len(), total);
    let summary = match_summary(matched_keywords.len(), total);

    Candidate {
        name: name.to_string(),
        score,
        matched_keywords,
        summary: summary.clone(),
        match_summary: summary,
        raw_text: raw_text.to_string(),
        normalized_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::models::KeywordEntry;

    fn jd_with(keywords: &[&str]) -> JobDescription {
        JobDescription {
            text: keywords.join(" "),
            normalized_text: keywords.join(" "),
            keywords: keywords
                .iter()
                .map(|k| KeywordEntry {
                    keyword: k.to_string(),
                    frequency: 1,
                    weight: 1.0 / keywords.len() as f32,
                })
                .collect(),
        }
    }

    #[test]
    fn test_two_of_five_scores_forty() {
        let jd = jd_with(&["python", "sql", "aws", "docker", "kubernetes"]);
        let c = score_candidate("a.pdf", "Experienced in Python and SQL.", &jd);
        assert_eq!(c.score, 40);
        assert_eq!(c.matched_keywords, vec!["python", "sql"]);
        assert_eq!(c.summary, "Matched 2/5 keywords");
        assert_eq!(c.match_summary, c.summary);
    }

    #[test]
    fn test_empty_keyword_set_scores_zero() {
        let jd = jd_with(&[]);
        let c = score_candidate("a.pdf", "python sql aws docker", &jd);
        assert_eq!(c.score, 0);
        assert!(c.matched_keywords.is_empty());
        assert_eq!(c.summary, "Matched 0/0 keywords");
    }

    #[test]
    fn test_token_match_rejects_partial_words() {
        let jd = jd_with(&["java", "go"]);
        let c = score_candidate("a.pdf", "JavaScript and Golang developer", &jd);
        assert_eq!(c.score, 0);
    }

    #[test]
    fn test_punctuation_does_not_block_match() {
        let jd = jd_with(&["kubernetes"]);
        let c = score_candidate("a.pdf", "Deployed (Kubernetes), Helm.", &jd);
        assert_eq!(c.score, 100);
    }

    #[test]
    fn test_compute_score_rounds_and_bounds() {
        assert_eq!(compute_score(1, 3), 33);
        assert_eq!(compute_score(2, 3), 67);
        assert_eq!(compute_score(1, 8), 13);
        assert_eq!(compute_score(0, 7), 0);
        assert_eq!(compute_score(7, 7), 100);
        assert_eq!(compute_score(9, 7), 100);
        assert_eq!(compute_score(3, 0), 0);
    }

    #[test]
    fn test_candidate_keeps_texts() {
        let jd = jd_with(&["rust"]);
        let c = score_candidate("cv.pdf", "Rust!", &jd);
        assert_eq!(c.raw_text, "Rust!");
        assert_eq!(c.normalized_text, "rust");
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let jd = jd_with(&["python", "sql", "aws"]);
        let first = score_candidate("a.pdf", "aws python", &jd);
        assert_eq!(score_candidate("a.pdf", "aws python", &jd), first);
    }
}
