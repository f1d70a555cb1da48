//! Word-guess round state and keyboard aggregation

mod keyboard;
mod round;

pub use keyboard::{KEY_ROWS, KeyboardState};
pub use round::{Dictionary, GameRound, GuessError, GuessRecord, MAX_GUESSES, RoundStatus};
