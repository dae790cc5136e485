//! Diversity-constrained selection: greedily keeps candidates whose
//! normalized Levenshtein distance to every already-kept item clears a
//! fixed threshold, so near-duplicate answers never co-occur.

use strsim::normalized_levenshtein;

/// Minimum pairwise lexical distance between any two selected items.
pub const DISTANCE_THRESHOLD: f64 = 0.7;

/// Normalized string distance in [0, 1]: 0 = identical, 1 = completely
/// different. Case-insensitive.
pub fn lexical_distance(a: &str, b: &str) -> f64 {
    1.0 - normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// True when `candidate` is at least `threshold` distant from every word in
/// `kept`. An empty kept-list is trivially distant.
pub fn is_distant_from_all(kept: &[String], candidate: &str, threshold: f64) -> bool {
    kept.iter()
        .all(|word| lexical_distance(word, candidate) >= threshold)
}

/// Greedy selection in input order: the first candidate is always kept,
/// each subsequent one only if it clears the distance threshold against all
/// kept items. Stops once `max_count` items are selected. Earlier-ranked
/// candidates win ties because input order is preserved.
pub fn filter_distinct(candidates: &[String], max_count: usize) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for candidate in candidates {
        if kept.len() >= max_count {
            break;
        }
        if kept.is_empty() || is_distant_from_all(&kept, candidate, DISTANCE_THRESHOLD) {
            kept.push(candidate.clone());
        }
    }
    kept
}
