//! CSV export of shortlisted candidates.

use crate::errors::AppError;
use crate::screening::models::Candidate;

pub const EXPORT_FILE_NAME: &str = "shortlisted_candidates.csv";
const HEADERS: [&str; 4] = ["Name", "Score", "Summary", "Matched Keywords"];

/// Writes candidates as UTF-8 CSV, one row each, in the order given.
pub fn candidates_to_csv(candidates: &[Candidate]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADERS)
        .map_err(|e| AppError::Export(e.to_string()))?;

    for c in candidates {
        let score = c.score.to_string();
        let keywords = c.matched_keywords.join(", ");
        writer
            .write_record([
                c.name.as_str(),
                score.as_str(),
                c.summary.as_str(),
                keywords.as_str(),
            ])
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, score: u8, keywords: &[&str]) -> Candidate {
        Candidate {
            name: name.to_string(),
            score,
            matched_keywords: keywords.iter().map(|k| k.to_string()).collect(),
            summary: format!("Matched {}/5 keywords", keywords.len()),
            match_summary: String::new(),
            raw_text: String::new(),
            normalized_text: String::new(),
        }
    }

    #[test]
    fn test_header_and_rows_in_given_order() {
        let rows = vec![
            candidate("zoe.pdf", 80, &["python", "sql", "aws", "docker"]),
            candidate("adam.pdf", 80, &["python", "sql", "aws", "kubernetes"]),
        ];
        let csv = String::from_utf8(candidates_to_csv(&rows).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Name,Score,Summary,Matched Keywords");
        assert_eq!(
            lines[1],
            "zoe.pdf,80,Matched 4/5 keywords,\"python, sql, aws, docker\""
        );
        assert!(lines[2].starts_with("adam.pdf,80,"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_export_has_only_header() {
        let csv = String::from_utf8(candidates_to_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv, "Name,Score,Summary,Matched Keywords\n");
    }

    #[test]
    fn test_quotes_in_summary_are_escaped() {
        let mut c = candidate("a.pdf", 50, &[]);
        c.summary = "Says \"expert\" in Rust".to_string();
        let csv = String::from_utf8(candidates_to_csv(&[c]).unwrap()).unwrap();
        assert!(csv.contains("\"Says \"\"expert\"\" in Rust\""));
    }
}
