//! Load-once lexical resources: an English stopword list and a corpus
//! frequency table used to rank keyphrase candidates (rarer terms make
//! better quiz answers than common ones).

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "isn't", "it", "its", "itself",
    "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "shouldn't", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "wasn't", "we", "were", "weren't", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "won't", "would",
    "wouldn't", "you", "your", "yours", "yourself", "yourselves",
];

/// Word counts modeled after a balanced English corpus distribution.
/// Words absent from the table count as zero, which sorts them first when
/// candidates are ordered by ascending frequency.
static WORD_COUNTS: &[(&str, u64)] = &[
    ("time", 1598),
    ("people", 847),
    ("way", 909),
    ("water", 442),
    ("day", 686),
    ("man", 1207),
    ("world", 787),
    ("life", 715),
    ("hand", 431),
    ("part", 500),
    ("child", 213),
    ("eye", 122),
    ("woman", 224),
    ("place", 571),
    ("work", 760),
    ("week", 275),
    ("case", 362),
    ("point", 395),
    ("government", 417),
    ("company", 267),
    ("number", 472),
    ("group", 390),
    ("problem", 313),
    ("fact", 447),
    ("year", 660),
    ("state", 808),
    ("school", 492),
    ("family", 331),
    ("student", 217),
    ("country", 324),
    ("question", 257),
    ("area", 324),
    ("money", 265),
    ("story", 153),
    ("month", 205),
    ("book", 292),
    ("word", 274),
    ("business", 393),
    ("side", 371),
    ("kind", 313),
    ("head", 424),
    ("house", 591),
    ("service", 308),
    ("friend", 133),
    ("father", 183),
    ("power", 367),
    ("hour", 145),
    ("game", 123),
    ("line", 298),
    ("end", 410),
    ("member", 137),
    ("law", 299),
    ("car", 274),
    ("city", 393),
    ("community", 231),
    ("name", 294),
    ("president", 382),
    ("team", 89),
    ("minute", 53),
    ("idea", 195),
    ("body", 276),
    ("information", 214),
    ("back", 967),
    ("face", 371),
    ("others", 257),
    ("level", 222),
    ("office", 255),
    ("door", 312),
    ("health", 105),
    ("person", 175),
    ("art", 208),
    ("war", 464),
    ("history", 286),
    ("party", 216),
    ("result", 244),
    ("change", 410),
    ("morning", 278),
    ("reason", 224),
    ("research", 171),
    ("girl", 220),
    ("guy", 25),
    ("moment", 246),
    ("air", 257),
    ("teacher", 80),
    ("force", 230),
    ("education", 214),
    ("cell", 65),
    ("energy", 100),
    ("matter", 308),
    ("system", 416),
    ("program", 394),
    ("night", 411),
    ("form", 370),
    ("mind", 325),
    ("interest", 330),
    ("development", 333),
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word.to_lowercase().as_str())
}

/// Frequency distribution over a reference corpus, loaded once per process
/// and read thereafter.
pub struct FreqDist {
    counts: HashMap<&'static str, u64>,
}

static GLOBAL_FREQ_DIST: Lazy<FreqDist> = Lazy::new(|| FreqDist {
    counts: WORD_COUNTS.iter().copied().collect(),
});

impl FreqDist {
    pub fn global() -> &'static FreqDist {
        &GLOBAL_FREQ_DIST
    }

    /// Corpus count for a term. Multi-word phrases and unseen words count
    /// as zero, which makes them sort as maximally rare.
    pub fn count(&self, term: &str) -> u64 {
        self.counts
            .get(term.to_lowercase().as_str())
            .copied()
            .unwrap_or(0)
    }
}
