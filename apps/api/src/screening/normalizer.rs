//! Text Normalizer — turns raw extracted text into the forms the extractor and matcher consume.

use std::collections::BTreeSet;

use crate::screening::stopwords::is_stop_word;

/// Shortest token the keyword extractor will consider.
const MIN_TOKEN_LEN: usize = 2;

/// Lowercases `text` and drops every character that is not `a-z` or whitespace.
/// Whitespace runs are preserved as-is.
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect()
}

/// Lowercases `text`, splits on whitespace and drops stopwords.
pub fn token_set(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|t| !is_stop_word(t))
        .collect()
}

/// Ordered tokens for term counting: cleaned, at least two letters long, stopwords removed.
pub fn tokenize(text: &str) -> Vec<String> {
    clean_text(text)
        .split_whitespace()
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !is_stop_word(t))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_lowercases_and_strips() {
        assert_eq!(clean_text("Rust, C++ & SQL!"), "rust c  sql");
    }

    #[test]
    fn test_clean_text_preserves_whitespace_runs() {
        assert_eq!(clean_text("a\t\tb\n\nc"), "a\t\tb\n\nc");
    }

    #[test]
    fn test_clean_text_drops_digits_and_non_ascii_letters() {
        assert_eq!(clean_text("5+ years Café"), " years caf");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_token_set_drops_stopwords_and_dedups() {
        let tokens = token_set("The Python and the SQL python");
        let expected: BTreeSet<String> = ["python", "sql"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_token_set_empty() {
        assert!(token_set("   ").is_empty());
    }

    #[test]
    fn test_tokenize_drops_short_tokens_and_keeps_order() {
        assert_eq!(
            tokenize("C and R are languages; Go is too, Python rocks"),
            vec!["languages", "python", "rocks"]
        );
    }
}
