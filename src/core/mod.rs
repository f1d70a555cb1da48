//! Core domain types for the word-guess game
//!
//! This module contains the fundamental domain types with zero external state.
//! All types here are pure, testable, and have clear mathematical properties.

mod verdict;
mod word;

pub use verdict::{Verdict, VerdictRow};
pub use word::{WORD_LENGTH, Word, WordError};
