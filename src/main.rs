//! Mini Games Arcade - CLI
//!
//! Terminal arcade with a TUI mode and a plain CLI word-game mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mini_arcade::{
    commands::{SimpleConfig, run_simple},
    core::Word,
    interactive::{App, run_tui},
    wordlists::{AnswerMode, SOLUTIONS, loader},
};

#[derive(Parser)]
#[command(
    name = "mini_arcade",
    about = "Terminal mini-games arcade: word guessing, tic-tac-toe, and number guessing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer selection: 'daily' (same word for everyone today) or 'random'
    #[arg(short, long, global = true, default_value = "daily")]
    mode: String,

    /// Require guesses to come from the word list
    #[arg(short, long, global = true)]
    strict: bool,

    /// Wordlist: 'embedded' (default, 40 words) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI arcade (default)
    Play,

    /// Plain CLI word game without the TUI
    Simple,
}

/// Load the solution list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => loader::words_from_slice(SOLUTIONS),
        path => loader::load_from_file(path)?,
    };

    anyhow::ensure!(!words.is_empty(), "word list '{wordlist_mode}' has no valid words");
    Ok(words)
}

fn parse_mode(mode: &str) -> Result<AnswerMode> {
    match mode {
        "daily" => Ok(AnswerMode::Daily),
        "random" => Ok(AnswerMode::Random),
        other => anyhow::bail!("unknown mode '{other}' (use 'daily' or 'random')"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let mode = parse_mode(&cli.mode)?;

    // Default to the TUI when no subcommand is given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let app = App::new(words, mode, cli.strict)?;
            run_tui(app)
        }
        Commands::Simple => {
            let config = SimpleConfig {
                mode,
                strict: cli.strict,
            };
            run_simple(&config, &words).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
