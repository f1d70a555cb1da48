//! Round state machine for the word-guess game
//!
//! A [`GameRound`] owns everything about one round: the answer, the guess
//! history with verdicts, the in-progress input, the keyboard state, and the
//! round status. All mutation goes through the transition methods below, and
//! `submit` validates fully before touching any state, so a rejected guess
//! never leaves a partial update behind.

use crate::core::{VerdictRow, WORD_LENGTH, Word};
use crate::game::keyboard::KeyboardState;
use std::fmt;

/// Maximum guesses before the round is lost
pub const MAX_GUESSES: usize = 6;

/// Dictionary-membership check injected for strict mode
///
/// The round treats this as an opaque predicate; where the words come from is
/// the caller's concern.
pub trait Dictionary {
    fn contains(&self, word: &Word) -> bool;
}

impl<F: Fn(&Word) -> bool> Dictionary for F {
    fn contains(&self, word: &Word) -> bool {
        self(word)
    }
}

/// One submitted guess and its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub verdicts: VerdictRow,
}

/// Round lifecycle
///
/// `Won` and `Lost` are terminal: no transition leaves them except
/// [`GameRound::reset`], which builds a fresh round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// True for `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Recoverable validation failures from [`GameRound::submit`]
///
/// None of these mutate the round; they surface as user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength,
    InvalidAlphabet,
    NotInDictionary,
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "Not enough letters."),
            Self::InvalidAlphabet => write!(f, "Only letters A-Z."),
            Self::NotInDictionary => write!(f, "Not in word list (strict mode)."),
            Self::GameOver => write!(f, "The round is over. Start a new game."),
        }
    }
}

impl std::error::Error for GuessError {}

/// State for one round of the word-guess game
#[derive(Debug, Clone)]
pub struct GameRound {
    answer: Word,
    history: Vec<GuessRecord>,
    input: String,
    status: RoundStatus,
    keyboard: KeyboardState,
}

impl GameRound {
    /// Start a round with the given answer
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            history: Vec::with_capacity(MAX_GUESSES),
            input: String::with_capacity(WORD_LENGTH),
            status: RoundStatus::InProgress,
            keyboard: KeyboardState::new(),
        }
    }

    /// Append a letter to the in-progress input
    ///
    /// No-op when the round is over, the input is already full, or `ch` is
    /// not an ASCII letter. Letters are stored uppercase.
    pub fn append_letter(&mut self, ch: char) {
        if self.status.is_terminal() || self.input.len() >= WORD_LENGTH || !ch.is_ascii_alphabetic()
        {
            return;
        }
        self.input.push(ch.to_ascii_uppercase());
    }

    /// Remove the last input letter; no-op when over or empty
    pub fn backspace(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        self.input.pop();
    }

    /// Empty the in-progress input; history is untouched
    pub fn clear_input(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        self.input.clear();
    }

    /// Submit the current input as a guess
    ///
    /// Validation happens before any mutation: length, alphabet, then the
    /// strict-mode dictionary check when `dictionary` is `Some`. On success
    /// the guess is evaluated, appended to history, folded into the keyboard,
    /// and the input cleared; the round transitions to `Won` on an exact
    /// match or `Lost` when the guess limit is reached.
    ///
    /// # Errors
    /// Returns a [`GuessError`] describing the rejected submission; the round
    /// state is unchanged in every error case.
    pub fn submit(&mut self, dictionary: Option<&dyn Dictionary>) -> Result<RoundStatus, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::GameOver);
        }

        if self.input.len() != WORD_LENGTH {
            return Err(GuessError::InvalidLength);
        }

        // append_letter only admits ASCII letters, but the input may also be
        // seeded through UI paste paths, so re-check before constructing
        let guess = match Word::new(&self.input) {
            Ok(word) => word,
            Err(_) => return Err(GuessError::InvalidAlphabet),
        };

        if let Some(dict) = dictionary
            && !dict.contains(&guess)
        {
            return Err(GuessError::NotInDictionary);
        }

        let verdicts = VerdictRow::evaluate(&guess, &self.answer);
        self.keyboard.record(&guess, verdicts);
        self.history.push(GuessRecord { guess, verdicts });
        self.input.clear();

        if verdicts.is_all_correct() {
            self.status = RoundStatus::Won;
        } else if self.history.len() >= MAX_GUESSES {
            self.status = RoundStatus::Lost;
        }

        Ok(self.status)
    }

    /// Discard everything and start over with a new answer
    pub fn reset(&mut self, answer: Word) {
        *self = Self::new(answer);
    }

    /// The round's answer
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    /// Submitted guesses with their verdicts, in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The in-progress input
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current round status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Keyboard state aggregated over the submitted guesses
    #[inline]
    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Guesses still available before the round is lost
    #[inline]
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }
}
