use regex::Regex;
use std::sync::OnceLock;

use super::stopwords::is_stop_word;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    // Runs of two or more word characters; single-letter tokens carry no
    // signal and are dropped.
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"\w\w+").unwrap())
}

/// Lowercased terms of the input text, stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|t| !is_stop_word(t))
        .collect()
}
