//! Display functions for the plain CLI mode

use super::formatters::{key_label, tile};
use crate::game::{GameRound, KEY_ROWS, RoundStatus};
use colored::Colorize;

/// Print the round's board: submitted rows as colored tiles, then empty rows
/// for the remaining guesses
pub fn print_board(round: &GameRound) {
    println!();
    for record in round.history() {
        let row: Vec<String> = record
            .guess
            .text()
            .chars()
            .zip(record.verdicts.iter())
            .map(|(letter, verdict)| tile(letter, verdict).to_string())
            .collect();
        println!("  {}", row.join(" "));
    }

    for _ in 0..round.guesses_remaining() {
        println!("  {}", "[ · ] [ · ] [ · ] [ · ] [ · ]".bright_black());
    }
    println!();
}

/// Print the on-screen keyboard with per-key status coloring
pub fn print_keyboard(round: &GameRound) {
    for (i, row) in KEY_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| key_label(letter, round.keyboard().status_of(letter)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(i), keys.join(" "));
    }
    println!();
}

/// Print the end-of-round banner with the share grid
pub fn print_round_result(round: &GameRound) {
    match round.status() {
        RoundStatus::Won => {
            let tries = round.history().len();
            println!(
                "{}",
                format!("✅ Solved in {tries} guess{}!", if tries == 1 { "" } else { "es" })
                    .green()
                    .bold()
            );
        }
        RoundStatus::Lost => {
            println!(
                "{}",
                format!("❌ Out of guesses! The word was {}", round.answer())
                    .red()
                    .bold()
            );
        }
        RoundStatus::InProgress => {}
    }

    if round.status().is_terminal() {
        println!("\nShare grid:");
        println!("{}", super::share_grid(round.history()));
    }
}
