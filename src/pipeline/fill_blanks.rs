//! Fill-in-the-blank generation: purely algorithmic, no model involved.
//! One interior word per sufficiently long sentence is blanked out.

use rand::Rng;
use serde::Serialize;

use crate::pipeline::segmenter::segment;

/// Sentences need more than this many words to give a blank any context.
const MIN_WORDS_FOR_BLANK: usize = 5;
const BLANK_MARKER: &str = "______";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillBlankQuestion {
    pub question: String,
    pub answer: String,
}

/// Blanks one interior word (never the first or last) per eligible
/// sentence until `max_questions` items exist. Empty text yields an empty
/// list; callers validate the count before reaching this point.
pub fn generate_fill_blanks(text: &str, max_questions: usize) -> Vec<FillBlankQuestion> {
    let mut rng = rand::thread_rng();
    let mut questions = Vec::new();

    for sentence in segment(text) {
        if questions.len() >= max_questions {
            break;
        }
        let mut words: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        if words.len() <= MIN_WORDS_FOR_BLANK {
            continue;
        }
        let blank_index = rng.gen_range(1..words.len() - 1);
        let answer = std::mem::replace(&mut words[blank_index], BLANK_MARKER.to_string());
        questions.push(FillBlankQuestion {
            question: words.join(" "),
            answer,
        });
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSAGE: &str = "Mitochondria are the powerhouse of the cell. \
        They produce ATP through oxidative phosphorylation. \
        The inner membrane contains the electron transport chain.";

    #[test]
    fn produces_at_most_requested_count() {
        let questions = generate_fill_blanks(PASSAGE, 2);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn blank_replaces_the_answer_word() {
        for item in generate_fill_blanks(PASSAGE, 10) {
            assert!(item.question.contains(BLANK_MARKER));
            assert!(!item.answer.is_empty());

            let restored = item.question.replacen(BLANK_MARKER, &item.answer, 1);
            assert!(!restored.contains(BLANK_MARKER));
        }
    }

    #[test]
    fn first_and_last_words_are_never_blanked() {
        for item in generate_fill_blanks(PASSAGE, 10) {
            assert!(!item.question.starts_with(BLANK_MARKER));
            assert!(!item.question.ends_with(BLANK_MARKER));
        }
    }

    #[test]
    fn empty_text_yields_empty_list() {
        assert!(generate_fill_blanks("", 4).is_empty());
    }

    #[test]
    fn short_sentences_are_skipped() {
        let questions = generate_fill_blanks("A very short sentence here is skipped.", 4);
        // seven words: eligible; but a five-word one is not
        let none = generate_fill_blanks("Only five words appear here.", 4);
        assert!(questions.len() <= 1);
        assert!(none.is_empty());
    }
}
