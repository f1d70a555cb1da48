//! TUI application state and logic

use crate::core::Word;
use crate::game::{Dictionary, GameRound, RoundStatus};
use crate::games::{NumberGuess, TicTacToe};
use crate::wordlists::{AnswerMode, WordSet, pick_answer};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which screen the arcade is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    WordGuess,
    TicTacToe,
    NumberGuess,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Word-guess screen state: the round plus session settings
pub struct WordScreen {
    pub round: GameRound,
    pub mode: AnswerMode,
    pub strict: bool,
    pub message: Option<Message>,
    words: Vec<Word>,
    dictionary: WordSet,
}

impl WordScreen {
    fn new(words: Vec<Word>, mode: AnswerMode, strict: bool) -> Result<Self> {
        let answer = pick_answer(mode, &words).context("word list is empty")?;
        let dictionary = WordSet::from_words(&words);

        Ok(Self {
            round: GameRound::new(answer),
            mode,
            strict,
            message: None,
            words,
            dictionary,
        })
    }

    /// Start a fresh round in the given mode
    pub fn new_round(&mut self, mode: AnswerMode) {
        self.mode = mode;
        if let Some(answer) = pick_answer(mode, &self.words) {
            self.round.reset(answer);
        }
        self.message = Some(Message {
            text: match mode {
                AnswerMode::Daily => "New round: today's word.".to_string(),
                AnswerMode::Random => "New round: random word.".to_string(),
            },
            style: MessageStyle::Info,
        });
    }

    /// Toggle strict dictionary validation for future submissions
    pub fn toggle_strict(&mut self) {
        self.strict = !self.strict;
        self.message = Some(Message {
            text: format!(
                "Strict word list {}.",
                if self.strict { "enabled" } else { "disabled" }
            ),
            style: MessageStyle::Info,
        });
    }

    /// Submit the current input and translate the outcome into a message
    pub fn submit(&mut self) {
        let dictionary = self
            .strict
            .then_some(&self.dictionary as &dyn Dictionary);

        match self.round.submit(dictionary) {
            Ok(RoundStatus::Won) => {
                let tries = self.round.history().len();
                self.message = Some(Message {
                    text: format!("🎉 You got it in {tries}! Ctrl+N for a new round."),
                    style: MessageStyle::Success,
                });
            }
            Ok(RoundStatus::Lost) => {
                self.message = Some(Message {
                    text: format!(
                        "Out of guesses! The word was {}. Ctrl+N for a new round.",
                        self.round.answer()
                    ),
                    style: MessageStyle::Error,
                });
            }
            Ok(RoundStatus::InProgress) => self.message = None,
            Err(err) => {
                self.message = Some(Message {
                    text: err.to_string(),
                    style: MessageStyle::Error,
                });
            }
        }
    }
}

/// Number-guess screen state: the game plus the typed input line
pub struct NumberScreen {
    pub game: NumberGuess,
    pub input: String,
    pub message: String,
}

impl NumberScreen {
    fn new() -> Self {
        Self {
            game: NumberGuess::new(),
            input: String::new(),
            message: "Pick a number from 1 to 100.".to_string(),
        }
    }

    /// Parse the input line and guess it
    pub fn submit(&mut self) {
        let Ok(number) = self.input.parse::<u32>() else {
            self.message = "Enter a number from 1 to 100.".to_string();
            self.input.clear();
            return;
        };
        self.input.clear();

        use crate::games::Hint;
        match self.game.guess(number) {
            Some(Hint::TooLow) => self.message = "Too low ⬇".to_string(),
            Some(Hint::TooHigh) => self.message = "Too high ⬆".to_string(),
            Some(Hint::Correct) => {
                self.message = format!("Correct ✅ You got it in {} tries!", self.game.tries());
            }
            None => self.message = "Already solved! Press 'n' for a new game.".to_string(),
        }
    }

    /// Fresh secret, cleared input
    pub fn reset(&mut self) {
        self.game.reset();
        self.input.clear();
        self.message = "Pick a number from 1 to 100.".to_string();
    }
}

/// Application state
pub struct App {
    pub screen: Screen,
    pub word: WordScreen,
    pub tictactoe: TicTacToe,
    pub number: NumberScreen,
    pub should_quit: bool,
}

impl App {
    /// Build the arcade
    ///
    /// # Errors
    /// Returns an error when the word list is empty.
    pub fn new(words: Vec<Word>, mode: AnswerMode, strict: bool) -> Result<Self> {
        Ok(Self {
            screen: Screen::Menu,
            word: WordScreen::new(words, mode, strict)?,
            tictactoe: TicTacToe::new(),
            number: NumberScreen::new(),
            should_quit: false,
        })
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(code),
            Screen::WordGuess => self.handle_word_key(code, modifiers),
            Screen::TicTacToe => self.handle_tictactoe_key(code),
            Screen::NumberGuess => self.handle_number_key(code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('1') => self.screen = Screen::WordGuess,
            KeyCode::Char('2') => self.screen = Screen::TicTacToe,
            KeyCode::Char('3') => self.screen = Screen::NumberGuess,
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_word_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Letter keys type into the round, so commands live on Ctrl
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('n') => self.word.new_round(self.word.mode),
                KeyCode::Char('d') => self.word.new_round(AnswerMode::Daily),
                KeyCode::Char('r') => self.word.new_round(AnswerMode::Random),
                KeyCode::Char('s') => self.word.toggle_strict(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.screen = Screen::Menu,
            KeyCode::Char(c) => {
                self.word.round.append_letter(c);
                self.word.message = None;
            }
            KeyCode::Backspace => self.word.round.backspace(),
            KeyCode::Enter => self.word.submit(),
            _ => {}
        }
    }

    fn handle_tictactoe_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.screen = Screen::Menu,
            KeyCode::Char('r' | 'n') => self.tictactoe.reset(),
            KeyCode::Char(c @ '1'..='9') => {
                // Keys 1-9 map to cells in reading order
                let cell = (c as usize) - ('1' as usize);
                self.tictactoe.play(cell);
            }
            _ => {}
        }
    }

    fn handle_number_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.screen = Screen::Menu,
            KeyCode::Char('n') => self.number.reset(),
            KeyCode::Char(c @ '0'..='9') => {
                if self.number.input.len() < 3 {
                    self.number.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.number.input.pop();
            }
            KeyCode::Enter => self.number.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{SOLUTIONS, loader::words_from_slice};

    fn app() -> App {
        let words = words_from_slice(SOLUTIONS);
        App::new(words, AnswerMode::Daily, false).unwrap()
    }

    #[test]
    fn app_requires_words() {
        assert!(App::new(Vec::new(), AnswerMode::Daily, false).is_err());
    }

    #[test]
    fn menu_navigation() {
        let mut app = app();
        assert_eq!(app.screen, Screen::Menu);

        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::TicTacToe);

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Menu);

        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn word_screen_types_letters() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);

        for c in "slate".chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.word.round.input(), "SLATE");

        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.word.round.input(), "SLAT");
    }

    #[test]
    fn word_screen_short_submit_sets_message() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('a'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        let message = app.word.message.as_ref().expect("expected a message");
        assert_eq!(message.text, "Not enough letters.");
        assert!(app.word.round.history().is_empty());
    }

    #[test]
    fn word_screen_ctrl_n_resets_round() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('a'), KeyModifiers::NONE);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(app.word.round.input(), "");
        assert!(app.word.round.history().is_empty());
    }

    #[test]
    fn tictactoe_keys_place_marks() {
        let mut app = app();
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);

        app.handle_key(KeyCode::Char('5'), KeyModifiers::NONE);
        assert_eq!(app.tictactoe.cell(4), Some(crate::games::Mark::X));

        app.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(app.tictactoe.cell(4), None);
    }

    #[test]
    fn number_screen_accepts_digits_only() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'), KeyModifiers::NONE);

        app.handle_key(KeyCode::Char('4'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(app.number.input, "42");

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.number.input, "");
        assert_eq!(app.number.game.tries(), 1);
    }
}
