pub mod assembler;
pub mod context;
pub mod distractors;
pub mod diversity;
pub mod extractor;
pub mod fill_blanks;
pub mod lexicon;
pub mod segmenter;

/// Tagged result of a single strategy attempt. Callers decide how to fall
/// through instead of relying on swallowed errors: `Empty` means the
/// strategy ran but produced nothing usable, `Failed` means it could not
/// run at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Hit(T),
    Empty,
    Failed(String),
}

impl<T> Outcome<T> {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit(_))
    }
}
