//! Higher-or-lower number guessing
//!
//! The secret is drawn from 1..=100. Every guess while unsolved costs one
//! try and earns a hint; a solved game ignores further guesses until reset.

use rand::Rng;
use std::ops::RangeInclusive;

/// Inclusive range the secret is drawn from
pub const SECRET_RANGE: RangeInclusive<u32> = 1..=100;

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
    Correct,
}

/// Number-guess game state
#[derive(Debug, Clone)]
pub struct NumberGuess {
    secret: u32,
    tries: u32,
    solved: bool,
}

impl Default for NumberGuess {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberGuess {
    /// Start a game with a random secret
    #[must_use]
    pub fn new() -> Self {
        Self::with_secret(rand::rng().random_range(SECRET_RANGE))
    }

    /// Start a game with a known secret (used by tests)
    #[must_use]
    pub const fn with_secret(secret: u32) -> Self {
        Self {
            secret,
            tries: 0,
            solved: false,
        }
    }

    /// Guess a number
    ///
    /// Returns `None` once the game is solved; otherwise increments the try
    /// counter and reports how the guess compares to the secret.
    pub fn guess(&mut self, number: u32) -> Option<Hint> {
        if self.solved {
            return None;
        }

        self.tries += 1;

        let hint = match number.cmp(&self.secret) {
            std::cmp::Ordering::Less => Hint::TooLow,
            std::cmp::Ordering::Greater => Hint::TooHigh,
            std::cmp::Ordering::Equal => {
                self.solved = true;
                Hint::Correct
            }
        };

        Some(hint)
    }

    /// Start over with a fresh random secret
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Guesses made so far
    #[inline]
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// True once the secret has been guessed
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }
}
