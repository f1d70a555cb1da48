//! Terminal output formatting
//!
//! Display utilities for the plain CLI mode and share grids.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_round_result};
pub use formatters::share_grid;
