//! Per-letter verdicts and guess evaluation
//!
//! Evaluation classifies each guess letter as:
//! - `Correct` (right letter, right position)
//! - `Present` (letter in the answer, wrong position)
//! - `Absent` (letter not in the answer, or all its occurrences used up)
//!
//! Duplicate letters are handled with the standard two-pass rule: a letter
//! earns `Correct`/`Present` at most as many times as it occurs in the answer.

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Classification of one guess letter against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Informativeness ranking used by the keyboard aggregation
    ///
    /// `Correct(3) > Present(2) > Absent(1)`; an unseen letter ranks 0.
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Emoji tile for share grids
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Verdicts for one submitted guess, one per letter position
///
/// Immutable once produced by [`VerdictRow::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictRow([Verdict; WORD_LENGTH]);

impl VerdictRow {
    /// Evaluate `guess` against `answer`
    ///
    /// Both arguments are already-validated [`Word`]s, so lengths and the
    /// A-Z alphabet are guaranteed; this function does not re-validate.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `Correct` and consume that
    ///    occurrence from the answer's letter pool
    /// 2. Second pass: left to right, mark `Present` where the letter still
    ///    has an unconsumed occurrence in the pool, consuming one per match
    ///
    /// This guarantees that for any letter, `Correct` + `Present` verdicts
    /// never exceed that letter's count in the answer.
    ///
    /// # Examples
    /// ```
    /// use mini_arcade::core::{Verdict, VerdictRow, Word};
    ///
    /// let answer = Word::new("crane").unwrap();
    /// let guess = Word::new("rance").unwrap();
    /// let row = VerdictRow::evaluate(&guess, &answer);
    ///
    /// assert_eq!(row.get(4), Verdict::Correct); // E in place
    /// assert_eq!(row.get(0), Verdict::Present); // R displaced
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut remaining = answer.char_counts();

        // First pass: exact position matches
        // Allow: index needed to compare guess[i] vs answer[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == answer.char_at(i) {
                result[i] = Verdict::Correct;

                if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: displaced letters, consuming the pool left to right
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Verdict::Absent {
                let letter = guess.char_at(i);
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = Verdict::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Check if every position is `Correct` (a winning guess)
    #[inline]
    #[must_use]
    pub fn is_all_correct(self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Get the verdict at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Iterate over the verdicts in position order
    pub fn iter(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.0.iter().copied()
    }

    /// Access the verdicts as a fixed-size array
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Render the row as one line of share-grid emoji
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

impl fmt::Display for VerdictRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn eval(guess: &str, answer: &str) -> [Verdict; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        *VerdictRow::evaluate(&guess, &answer).as_array()
    }

    #[test]
    fn verdict_priorities_ordered() {
        assert!(Correct.priority() > Present.priority());
        assert!(Present.priority() > Absent.priority());
        assert!(Absent.priority() > 0);
    }

    #[test]
    fn evaluate_answer_against_itself_all_correct() {
        for word in ["crane", "slate", "berry", "pizza"] {
            let w = Word::new(word).unwrap();
            assert!(VerdictRow::evaluate(&w, &w).is_all_correct());
        }
    }

    #[test]
    fn evaluate_no_shared_letters_all_absent() {
        assert_eq!(eval("light", "pizza"), [Absent, Correct, Absent, Absent, Absent]);
        // LIGHT vs WOVEN: no letter overlap at all
        assert_eq!(eval("light", "woven"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn evaluate_displaced_letters_all_present() {
        // Every letter of RANCE occurs in CRANE, only E is in place
        assert_eq!(
            eval("rance", "crane"),
            [Present, Present, Present, Present, Correct]
        );
    }

    #[test]
    fn evaluate_duplicates_consume_answer_pool() {
        // BERRY has two Rs: the exact match at pos 2 consumes one, the
        // displaced R at pos 1 consumes the other, and the final R gets
        // nothing left
        assert_eq!(
            eval("error", "berry"),
            [Present, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_duplicates_in_guess_not_in_answer() {
        // SPEED vs ERASE: ERASE has two Es, so both guess Es are Present;
        // the D and P have no match
        assert_eq!(
            eval("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn evaluate_green_consumes_before_yellow() {
        // ROBOT vs FLOOR: second O is an exact match; the first O takes the
        // one remaining O as Present
        assert_eq!(
            eval("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn evaluate_per_letter_verdicts_bounded_by_answer_count() {
        // Property check over a handful of tricky pairs: for each letter,
        // Correct + Present never exceeds its count in the answer
        let pairs = [
            ("error", "berry"),
            ("speed", "erase"),
            ("geese", "eerie"),
            ("mamma", "drama"),
            ("berry", "error"),
        ];

        for (guess, answer) in pairs {
            let g = Word::new(guess).unwrap();
            let a = Word::new(answer).unwrap();
            let row = VerdictRow::evaluate(&g, &a);
            let answer_counts = a.char_counts();

            for letter in b'A'..=b'Z' {
                let scored = (0..WORD_LENGTH)
                    .filter(|&i| g.char_at(i) == letter && row.get(i) != Absent)
                    .count();
                let available = usize::from(*answer_counts.get(&letter).unwrap_or(&0));
                assert!(
                    scored <= available,
                    "{guess} vs {answer}: letter {} scored {scored} > {available}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn evaluate_deterministic() {
        let guess = Word::new("error").unwrap();
        let answer = Word::new("berry").unwrap();

        let first = VerdictRow::evaluate(&guess, &answer);
        for _ in 0..10 {
            assert_eq!(VerdictRow::evaluate(&guess, &answer), first);
        }
    }

    #[test]
    fn verdict_row_to_emoji() {
        let row = VerdictRow::evaluate(
            &Word::new("error").unwrap(),
            &Word::new("berry").unwrap(),
        );
        assert_eq!(row.to_emoji(), "🟨🟨🟩⬛⬛");
    }
}
