//! Sentence segmentation: splits raw input text into candidate sentences
//! and discards fragments too short to carry a question.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fragments at or below this character length are presumed headers, list
/// bullets or noise and are dropped.
const MIN_SENTENCE_LEN: usize = 20;

static SENTENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^.!?]+[.!?]*["')\]]*"#).expect("sentence pattern is valid"));

/// Splits `text` on sentence-ending punctuation, preserving original order.
/// Pure function: identical input always yields identical output. Empty
/// input yields an empty vector, not an error.
pub fn segment(text: &str) -> Vec<String> {
    SENTENCE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_LEN)
        .collect()
}
