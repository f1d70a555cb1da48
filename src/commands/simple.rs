//! Simple interactive CLI mode
//!
//! Line-oriented word game without the TUI.

use crate::core::{WORD_LENGTH, Word};
use crate::game::{Dictionary, GameRound, GuessError, MAX_GUESSES, RoundStatus};
use crate::output::{print_board, print_keyboard, print_round_result};
use crate::wordlists::{AnswerMode, WordSet, pick_answer};
use std::io::{self, Write};

/// Configuration for a CLI game session
pub struct SimpleConfig {
    pub mode: AnswerMode,
    pub strict: bool,
}

/// Run the plain CLI word game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// word list is empty.
pub fn run_simple(config: &SimpleConfig, words: &[Word]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Guess - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.");
    println!("Commands: 'quit' to exit, 'new' for a new round\n");

    let dictionary = WordSet::from_words(words);
    let answer = pick_answer(config.mode, words).ok_or("Word list is empty")?;
    let mut round = GameRound::new(answer);

    loop {
        print_board(&round);
        print_keyboard(&round);

        if round.status().is_terminal() {
            print_round_result(&round);

            match get_user_input("Play again? ('new' or 'quit')")?.as_str() {
                "new" | "y" | "yes" => {
                    let answer = pick_answer(config.mode, words).ok_or("Word list is empty")?;
                    round.reset(answer);
                    continue;
                }
                _ => break,
            }
        }

        let input = get_user_input("Enter a guess")?;

        match input.as_str() {
            "quit" | "exit" | "q" => break,
            "new" => {
                let answer = pick_answer(config.mode, words).ok_or("Word list is empty")?;
                round.reset(answer);
                println!("\n🔄 New round started!\n");
                continue;
            }
            guess => {
                round.clear_input();
                for ch in guess.chars() {
                    round.append_letter(ch);
                }

                // append_letter drops non-letters and truncates silently;
                // reject the guess instead so typos are visible
                if round.input().len() != guess.len() {
                    round.clear_input();
                    let err = if guess.chars().all(|c| c.is_ascii_alphabetic()) {
                        GuessError::InvalidLength
                    } else {
                        GuessError::InvalidAlphabet
                    };
                    println!("{err}");
                    continue;
                }

                let strict_dict = config.strict.then_some(&dictionary as &dyn Dictionary);
                match round.submit(strict_dict) {
                    Ok(RoundStatus::InProgress | RoundStatus::Won | RoundStatus::Lost) => {}
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    println!("\nThanks for playing! 👋\n");
    Ok(())
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_lowercase())
}
