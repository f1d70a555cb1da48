//! The arcade's other games: tic-tac-toe and number guessing

mod number_guess;
mod tictactoe;

pub use number_guess::{Hint, NumberGuess, SECRET_RANGE};
pub use tictactoe::{Mark, Outcome, TicTacToe};
