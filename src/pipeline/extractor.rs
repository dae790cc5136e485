//! Candidate extraction: two independent strategies (statistical keyphrase
//! ranking and syntactic chunk extraction) merged under a diversity bound,
//! then gated on backend availability.

use std::collections::HashMap;

use crate::backends::SimilarityBackend;
use crate::pipeline::diversity::filter_distinct;
use crate::pipeline::lexicon::{is_stopword, FreqDist};
use crate::pipeline::Outcome;

/// Upper bound on statistically-ranked keyphrases.
const MAX_RANKED_PHRASES: usize = 10;
/// Upper bound on syntactic chunk candidates.
const MAX_CHUNKS: usize = 50;
/// Co-occurrence window (in content-word positions) for the ranking graph.
const COOCCURRENCE_WINDOW: usize = 3;

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '-' || c == '\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Content words approximate the noun/proper-noun restriction: non-stopword
/// alphabetic tokens long enough to carry meaning.
fn is_content_word(token: &str) -> bool {
    token.chars().count() > 2
        && token.chars().any(|c| c.is_alphabetic())
        && !is_stopword(token)
}

/// Maximal runs of adjacent content words, in document order. These stand
/// in for noun chunks.
fn content_word_runs(text: &str) -> Vec<Vec<String>> {
    let mut runs = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for token in tokenize(text) {
        if is_content_word(&token) {
            current.push(token);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Statistical keyphrase ranking: a co-occurrence graph over content words
/// scores each word by its weighted degree; candidate phrases are scored by
/// the sum of their word scores and the top ten are returned. Degenerate
/// input (no rankable words) is a `Failed` outcome the caller absorbs.
pub fn rank_keyphrases(text: &str) -> Outcome<Vec<String>> {
    if text.trim().is_empty() {
        return Outcome::Empty;
    }

    let words: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| is_content_word(t))
        .map(|t| t.to_lowercase())
        .collect();
    if words.len() < 2 {
        return Outcome::Failed("not enough rankable content words".to_string());
    }

    let mut degree: HashMap<&str, f64> = HashMap::new();
    for (i, word) in words.iter().enumerate() {
        let end = (i + 1 + COOCCURRENCE_WINDOW).min(words.len());
        for other in &words[i + 1..end] {
            if other != word {
                *degree.entry(word.as_str()).or_insert(0.0) += 1.0;
                *degree.entry(other.as_str()).or_insert(0.0) += 1.0;
            }
        }
    }

    let mut seen: HashMap<String, f64> = HashMap::new();
    let mut ordered: Vec<String> = Vec::new();
    for run in content_word_runs(text) {
        let phrase = run.join(" ");
        let score: f64 = run
            .iter()
            .map(|w| degree.get(w.to_lowercase().as_str()).copied().unwrap_or(0.0))
            .sum();
        if !seen.contains_key(&phrase.to_lowercase()) {
            seen.insert(phrase.to_lowercase(), score);
            ordered.push(phrase);
        }
    }

    ordered.sort_by(|a, b| {
        let sa = seen.get(&a.to_lowercase()).copied().unwrap_or(0.0);
        let sb = seen.get(&b.to_lowercase()).copied().unwrap_or(0.0);
        sb.partial_cmp(&sa).unwrap_or(std::cmp::Ordering::Equal)
    });
    ordered.truncate(MAX_RANKED_PHRASES);

    if ordered.is_empty() {
        Outcome::Empty
    } else {
        Outcome::Hit(ordered)
    }
}

/// Syntactic chunk extraction: multi-word content runs, counted, the
/// longest fifty distinct chunks first. Longer phrases tend to be more
/// specific and make more informative answers.
pub fn extract_chunks(text: &str) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut ordered: Vec<String> = Vec::new();
    for run in content_word_runs(text) {
        if run.len() > 1 {
            let phrase = run.join(" ");
            let entry = counts.entry(phrase.clone()).or_insert(0);
            if *entry == 0 {
                ordered.push(phrase);
            }
            *entry += 1;
        }
    }

    ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    ordered.truncate(MAX_CHUNKS);
    ordered
}

/// Full candidate selection: both strategies, frequency-ordered ranking,
/// per-strategy and joint diversity filtering bounded by
/// `min(max_keywords, 2 × sentence_count)`, then the availability gate with
/// relaxation — when too few gated candidates remain, ungated ones are
/// added back so the requested question count can still be met.
pub async fn identify_keywords(
    text: &str,
    max_keywords: usize,
    sentence_count: usize,
    similarity: &dyn SimilarityBackend,
) -> Vec<String> {
    if max_keywords == 0 {
        return Vec::new();
    }

    let mut ranked = match rank_keyphrases(text) {
        Outcome::Hit(phrases) => phrases,
        Outcome::Empty => Vec::new(),
        Outcome::Failed(reason) => {
            log::warn!("keyphrase ranking failed, continuing without it: {}", reason);
            Vec::new()
        }
    };
    // rarer terms make better quiz answers; stable sort keeps graph rank
    // as the tie-break
    let fdist = FreqDist::global();
    ranked.sort_by_key(|phrase| fdist.count(phrase));
    let ranked = filter_distinct(&ranked, max_keywords);

    let chunks = filter_distinct(&extract_chunks(text), max_keywords);

    let combined: Vec<String> = ranked.into_iter().chain(chunks).collect();
    let pool = filter_distinct(&combined, max_keywords.min(2 * sentence_count));

    let mut answers: Vec<String> = Vec::new();
    let mut skipped: Vec<String> = Vec::new();
    for candidate in &pool {
        if answers.len() >= max_keywords {
            break;
        }
        if answers.iter().any(|a| a == candidate) {
            continue;
        }
        if similarity.is_representable(candidate).await {
            answers.push(candidate.clone());
        } else {
            skipped.push(candidate.clone());
        }
    }

    if answers.len() < max_keywords && !skipped.is_empty() {
        log::info!(
            "availability gate left {} of {} requested answers, relaxing filter",
            answers.len(),
            max_keywords
        );
        for candidate in skipped {
            if answers.len() >= max_keywords {
                break;
            }
            answers.push(candidate);
        }
    }

    answers
}
