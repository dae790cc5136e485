//! Context mapping: associates each answer with the sentences that contain
//! it and condenses the best three into a context snippet.

use regex::Regex;

/// How many matching sentences are merged into one context snippet.
const MAX_CONTEXT_SENTENCES: usize = 3;

/// An answer together with the context snippet it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerContext {
    pub answer: String,
    pub context: String,
}

fn whole_phrase_pattern(answer: &str) -> Option<Regex> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(trimmed))).ok()
}

/// Builds the answer-to-context mapping in a single filter-then-insert
/// pass. Matching is case-insensitive and word-boundary anchored, so "cat"
/// never matches "category". Matched sentences are ordered longest-first
/// (length as a proxy for informativeness) and the top three joined.
/// Answers with no matching sentence are dropped; every entry in the
/// result is guaranteed a non-empty context.
pub fn map_answers_to_context(answers: &[String], sentences: &[String]) -> Vec<AnswerContext> {
    let mut mapping = Vec::new();
    for answer in answers {
        let Some(pattern) = whole_phrase_pattern(answer) else {
            continue;
        };
        let mut matched: Vec<&String> = sentences
            .iter()
            .filter(|sentence| pattern.is_match(sentence))
            .collect();
        if matched.is_empty() {
            continue;
        }
        matched.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        let snippet = matched
            .iter()
            .take(MAX_CONTEXT_SENTENCES)
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        mapping.push(AnswerContext {
            answer: answer.clone(),
            context: snippet,
        });
    }
    mapping
}
