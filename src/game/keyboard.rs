//! On-screen keyboard state aggregation
//!
//! Tracks the best verdict seen so far for each letter across all submitted
//! guesses. A letter's status only ever upgrades: once a key is shown
//! `Correct`, a later guess placing the same letter in a wrong slot cannot
//! downgrade it.

use crate::core::{Verdict, VerdictRow, Word};

/// QWERTY layout rows for rendering the keyboard
pub const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best-known verdict per letter A-Z
///
/// `None` means the letter has not appeared in any submitted guess yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    statuses: [Option<Verdict>; 26],
}

impl KeyboardState {
    /// Create a keyboard with every letter unseen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one submitted guess and its verdicts into the keyboard
    ///
    /// Each letter's status is replaced only when the new verdict has
    /// strictly higher priority than the recorded one, so statuses are
    /// monotonic in informativeness.
    pub fn record(&mut self, guess: &Word, verdicts: VerdictRow) {
        for (i, verdict) in verdicts.iter().enumerate() {
            let slot = &mut self.statuses[Self::index(guess.char_at(i))];
            let current = slot.map_or(0, Verdict::priority);
            if verdict.priority() > current {
                *slot = Some(verdict);
            }
        }
    }

    /// Best verdict seen for a letter, or `None` if unseen
    ///
    /// Non-letter input returns `None`.
    #[must_use]
    pub fn status_of(&self, letter: char) -> Option<Verdict> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.statuses[Self::index(upper as u8)]
        } else {
            None
        }
    }

    /// Reset every letter to unseen
    pub fn clear(&mut self) {
        self.statuses = [None; 26];
    }

    #[inline]
    fn index(letter: u8) -> usize {
        usize::from(letter - b'A')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(guess: &str, answer: &str) -> (Word, VerdictRow) {
        let g = Word::new(guess).unwrap();
        let a = Word::new(answer).unwrap();
        let v = VerdictRow::evaluate(&g, &a);
        (g, v)
    }

    #[test]
    fn keyboard_starts_unseen() {
        let kb = KeyboardState::new();
        for letter in 'A'..='Z' {
            assert_eq!(kb.status_of(letter), None);
        }
    }

    #[test]
    fn keyboard_records_verdicts() {
        let mut kb = KeyboardState::new();
        let (g, v) = row("crane", "slate");
        kb.record(&g, v);

        // CRANE vs SLATE: C gray, R gray, A green, N gray, E green
        assert_eq!(kb.status_of('A'), Some(Verdict::Correct));
        assert_eq!(kb.status_of('E'), Some(Verdict::Correct));
        assert_eq!(kb.status_of('C'), Some(Verdict::Absent));
        assert_eq!(kb.status_of('Z'), None);
    }

    #[test]
    fn keyboard_never_downgrades() {
        let mut kb = KeyboardState::new();

        // TRACE vs SLATE puts T Present
        let (g, v) = row("trace", "slate");
        kb.record(&g, v);
        assert_eq!(kb.status_of('T'), Some(Verdict::Present));

        // SLATE vs SLATE upgrades T to Correct
        let (g, v) = row("slate", "slate");
        kb.record(&g, v);
        assert_eq!(kb.status_of('T'), Some(Verdict::Correct));

        // A guess where T lands Absent (duplicate T with the pool used up)
        // must not downgrade the key
        let (g, v) = row("taste", "slate");
        kb.record(&g, v);
        assert_eq!(kb.status_of('T'), Some(Verdict::Correct));
    }

    #[test]
    fn keyboard_monotonic_across_folds() {
        let mut kb = KeyboardState::new();
        let guesses = ["crane", "trace", "berry", "slate", "pasta"];

        for guess in guesses {
            let before: Vec<u8> = ('A'..='Z')
                .map(|c| kb.status_of(c).map_or(0, Verdict::priority))
                .collect();

            let (g, v) = row(guess, "slate");
            kb.record(&g, v);

            for (i, letter) in ('A'..='Z').enumerate() {
                let after = kb.status_of(letter).map_or(0, Verdict::priority);
                assert!(after >= before[i], "status of {letter} regressed");
            }
        }
    }

    #[test]
    fn keyboard_clear_resets_all() {
        let mut kb = KeyboardState::new();
        let (g, v) = row("crane", "slate");
        kb.record(&g, v);
        kb.clear();

        for letter in 'A'..='Z' {
            assert_eq!(kb.status_of(letter), None);
        }
    }

    #[test]
    fn keyboard_ignores_non_letters() {
        let kb = KeyboardState::new();
        assert_eq!(kb.status_of('1'), None);
        assert_eq!(kb.status_of(' '), None);
    }

    #[test]
    fn key_rows_cover_alphabet() {
        let all: String = KEY_ROWS.concat();
        assert_eq!(all.len(), 26);
        for letter in 'A'..='Z' {
            assert!(all.contains(letter));
        }
    }
}
