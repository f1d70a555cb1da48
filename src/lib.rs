//! Mini Games Arcade
//!
//! A terminal arcade with three casual games: a Wordle-style word guesser,
//! tic-tac-toe, and higher-or-lower number guessing.
//!
//! # Quick Start
//!
//! ```rust
//! use mini_arcade::core::{VerdictRow, Word};
//! use mini_arcade::game::GameRound;
//!
//! // Evaluate a guess directly
//! let answer = Word::new("crane").unwrap();
//! let guess = Word::new("slate").unwrap();
//! let row = VerdictRow::evaluate(&guess, &answer);
//! println!("{row}");
//!
//! // Or play a round through the state machine
//! let mut round = GameRound::new(answer);
//! for ch in "slate".chars() {
//!     round.append_letter(ch);
//! }
//! round.submit(None).unwrap();
//! assert_eq!(round.history().len(), 1);
//! ```

// Core domain types
pub mod core;

// Word-guess round state
pub mod game;

// The other arcade games
pub mod games;

// Word lists and answer picking
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
