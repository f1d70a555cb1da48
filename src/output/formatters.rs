//! Output formatting utilities

use crate::core::Verdict;
use crate::game::GuessRecord;
use colored::{ColoredString, Colorize};

/// Render one guess letter as a colored terminal tile
#[must_use]
pub fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Verdict::Correct => text.black().on_green(),
        Verdict::Present => text.black().on_yellow(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// Render a keyboard key according to its best-known status
#[must_use]
pub fn key_label(letter: char, status: Option<Verdict>) -> ColoredString {
    match status {
        Some(Verdict::Correct) => letter.to_string().black().on_green(),
        Some(Verdict::Present) => letter.to_string().black().on_yellow(),
        Some(Verdict::Absent) => letter.to_string().bright_black(),
        None => letter.to_string().normal(),
    }
}

/// Emoji share grid for a finished round, one line per guess
///
/// # Examples
/// ```
/// use mini_arcade::core::{VerdictRow, Word};
/// use mini_arcade::game::GuessRecord;
/// use mini_arcade::output::share_grid;
///
/// let answer = Word::new("berry").unwrap();
/// let guess = Word::new("error").unwrap();
/// let record = GuessRecord {
///     verdicts: VerdictRow::evaluate(&guess, &answer),
///     guess,
/// };
///
/// assert_eq!(share_grid(&[record]), "🟨🟨🟩⬛⬛");
/// ```
#[must_use]
pub fn share_grid(history: &[GuessRecord]) -> String {
    history
        .iter()
        .map(|record| record.verdicts.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}
