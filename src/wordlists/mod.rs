//! Word lists for the word-guess game
//!
//! Provides the embedded solution list, file loading, answer picking, and a
//! set-backed dictionary for strict-mode validation.

mod embedded;
pub mod loader;
mod picker;

pub use embedded::{SOLUTIONS, SOLUTIONS_COUNT};
pub use picker::{AnswerMode, daily_index, pick_answer};

use crate::core::Word;
use crate::game::Dictionary;
use rustc_hash::FxHashSet;

/// Set of acceptable guess words
///
/// The strict-mode guess set equals the solution set: this game's word list
/// is small and curated, so there is no separate "allowed" list.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a set from any word collection
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        Self {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }

    /// Number of words in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSet {
    fn contains(&self, word: &Word) -> bool {
        self.words.contains(word.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn solutions_are_valid_words() {
        // All solutions should be 5 letters, uppercase
        for &word in SOLUTIONS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn expected_count() {
        assert_eq!(SOLUTIONS_COUNT, 40, "Expected 40 solution words");
    }

    #[test]
    fn word_set_membership() {
        let words = words_from_slice(SOLUTIONS);
        let set = WordSet::from_words(&words);

        assert_eq!(set.len(), words.len());
        assert!(set.contains(&Word::new("crane").unwrap()));
        assert!(!set.contains(&Word::new("zzzzz").unwrap()));
    }
}
