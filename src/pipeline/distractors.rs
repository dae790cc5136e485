//! Distractor synthesis: a chain of strategies tried in order, first
//! success wins. Semantic neighbors from the similarity backend, then
//! knowledge-graph relations, then rule-based perturbation. A failing
//! strategy degrades to the next one; the chain itself never errors.

use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use strsim::damerau_levenshtein;

use crate::backends::{KnowledgeGraph, SimilarityBackend, DISTRACTOR_RELATIONS};
use crate::pipeline::diversity::filter_distinct;
use crate::pipeline::Outcome;

/// Distractors presented alongside the answer in an MCQ.
pub const DESIRED_DISTRACTORS: usize = 3;
/// Neighbors requested from the similarity backend per lookup.
const NEIGHBOR_POOL: usize = 15;
/// Cap on the diversity-filtered option pool; the first three become
/// options, the remainder extra options.
const OPTION_POOL: usize = 10;

/// Source tag for a set of distractors, reported on the question record.
pub const SOURCE_CONCEPTNET: &str = "conceptnet";
pub const SOURCE_FALLBACK: &str = "fallback";
pub const SOURCE_NONE: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistractorSet {
    pub options: Vec<String>,
    pub source: String,
}

impl DistractorSet {
    fn empty() -> Self {
        Self {
            options: Vec::new(),
            source: SOURCE_NONE.to_string(),
        }
    }
}

fn normalize(term: &str) -> String {
    term.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Single-character edits and adjacent transpositions of the answer leak
/// the answer and are never acceptable distractors.
fn is_edit_variant(answer: &str, candidate: &str) -> bool {
    damerau_levenshtein(&normalize(answer), &normalize(candidate)) <= 1
}

fn title_case(term: &str) -> String {
    term.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes self-leaks (case-insensitive equals, edit variants, candidates
/// that merely contain the answer) and case-insensitive duplicates,
/// preserving order.
fn sanitize(answer: &str, raw: Vec<String>) -> Vec<String> {
    let answer_norm = normalize(answer);
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(answer_norm.clone());

    let mut clean = Vec::new();
    for candidate in raw {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            continue;
        }
        let norm = normalize(trimmed);
        if norm.is_empty()
            || seen.contains(&norm)
            || is_edit_variant(answer, trimmed)
            || norm.contains(&answer_norm)
        {
            continue;
        }
        seen.insert(norm);
        clean.push(title_case(trimmed));
    }
    clean
}

/// Templated alternatives embed the answer by construction, so the
/// containment check does not apply to them. Equality, edit variants and
/// duplicates are still rejected.
fn sanitize_alternatives(answer: &str, raw: Vec<String>) -> Vec<String> {
    let answer_norm = normalize(answer);
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(answer_norm);

    let mut clean = Vec::new();
    for candidate in raw {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            continue;
        }
        let norm = normalize(trimmed);
        if norm.is_empty() || seen.contains(&norm) || is_edit_variant(answer, trimmed) {
            continue;
        }
        seen.insert(norm);
        clean.push(title_case(trimmed));
    }
    clean
}

pub struct DistractorSynthesizer {
    similarity: Arc<dyn SimilarityBackend>,
    knowledge_graph: Arc<dyn KnowledgeGraph>,
}

impl DistractorSynthesizer {
    pub fn new(
        similarity: Arc<dyn SimilarityBackend>,
        knowledge_graph: Arc<dyn KnowledgeGraph>,
    ) -> Self {
        Self {
            similarity,
            knowledge_graph,
        }
    }

    /// Runs the strategy chain for `answer`. Always returns a set — empty
    /// with source `"None"` when every strategy is exhausted — and never
    /// propagates a backend failure to the caller.
    pub async fn synthesize(&self, answer: &str) -> DistractorSet {
        match self.from_embedding(answer).await {
            Outcome::Hit(options) => {
                return DistractorSet {
                    options: filter_distinct(&options, OPTION_POOL),
                    source: self.similarity.label().to_string(),
                };
            }
            Outcome::Empty => {
                log::debug!("no embedding neighbors for '{}'", answer);
            }
            Outcome::Failed(reason) => {
                log::warn!("embedding strategy failed for '{}': {}", answer, reason);
            }
        }

        match self.from_knowledge_graph(answer).await {
            Outcome::Hit(options) => {
                return DistractorSet {
                    options: filter_distinct(&options, OPTION_POOL),
                    source: SOURCE_CONCEPTNET.to_string(),
                };
            }
            Outcome::Empty => {
                log::debug!("no knowledge-graph concepts for '{}'", answer);
            }
            Outcome::Failed(reason) => {
                log::warn!("knowledge-graph strategy failed for '{}': {}", answer, reason);
            }
        }

        let rule_based = sanitize_alternatives(answer, rule_based_alternatives(answer));
        if !rule_based.is_empty() {
            return DistractorSet {
                options: filter_distinct(&rule_based, OPTION_POOL),
                source: SOURCE_FALLBACK.to_string(),
            };
        }

        DistractorSet::empty()
    }

    async fn from_embedding(&self, answer: &str) -> Outcome<Vec<String>> {
        let neighbors = match self
            .similarity
            .nearest_neighbors(answer, NEIGHBOR_POOL)
            .await
        {
            Ok(neighbors) => neighbors,
            Err(err) => return Outcome::Failed(err.to_string()),
        };

        let raw: Vec<String> = neighbors
            .into_iter()
            .map(|n| n.term.replace('_', " "))
            .collect();
        let clean = sanitize(answer, raw);
        if clean.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Hit(clean)
        }
    }

    async fn from_knowledge_graph(&self, answer: &str) -> Outcome<Vec<String>> {
        let concepts = match self
            .knowledge_graph
            .related_concepts(answer, DISTRACTOR_RELATIONS)
            .await
        {
            Ok(concepts) => concepts,
            Err(err) => return Outcome::Failed(err.to_string()),
        };

        let mut clean = sanitize(answer, concepts);
        // related concepts arrive grouped by relation; shuffle so one
        // relation type does not dominate the option list
        clean.shuffle(&mut rand::thread_rng());
        if clean.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Hit(clean)
        }
    }
}

/// Last-resort templated alternatives with no external dependency: prefix
/// perturbations and word reversal for phrases.
fn rule_based_alternatives(answer: &str) -> Vec<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut alternatives = Vec::new();

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() > 1 {
        let reversed: Vec<&str> = words.iter().rev().copied().collect();
        alternatives.push(reversed.join(" "));
    }

    for prefix in ["non", "pseudo", "proto"] {
        alternatives.push(format!("{}-{}", prefix, trimmed.to_lowercase()));
    }

    alternatives
}

/// Pads `options` with templated strings until `target` entries exist.
/// Used where strict four-option MCQs are required.
pub fn pad_options(answer: &str, options: &mut Vec<String>, target: usize) {
    let mut i = 1;
    while options.len() < target {
        options.push(format!("Alternative {} to {}", i, answer));
        i += 1;
    }
}
